use super::{
    classify, flatten, strip_root, Cascade, ChangeDetector, Classification, Error, Flags, Label,
    Mode, RelPath, Report, Snapshot,
};

use abst_fs::AbstPath;
use tracing::debug;

/// Compare two snapshots, deciding changes on size then checksum or mtime
pub fn compare(
    flags: &Flags,
    before: &Snapshot,
    after: &Snapshot,
    mode: Mode,
) -> Result<Report, Error> {
    compare_with(flags, before, after, &Cascade::new(mode))
}

/// Compare two snapshots, asking `detector` whether each file present in both
/// has changed. The detector only runs when the changed or unchanged group is
/// selected
pub fn compare_with<D: ChangeDetector + ?Sized>(
    flags: &Flags,
    before: &Snapshot,
    after: &Snapshot,
    detector: &D,
) -> Result<Report, Error> {
    let before_paths = strip_root(before.root(), &flatten(before));
    let after_paths = strip_root(after.root(), &flatten(after));

    let Classification {
        added,
        removed,
        common,
    } = classify(&before_paths, &after_paths);
    debug!(
        added = added.len(),
        removed = removed.len(),
        common = common.len(),
        "paths classified"
    );

    let (changed, unchanged) =
        if flags.contains(Label::Changed) || flags.contains(Label::Unchanged) {
            detect_changes(&common, before.root(), after.root(), detector)?
        } else {
            (Vec::new(), Vec::new())
        };

    let mut report = Report::new();
    for label in flags.labels() {
        let paths = match label {
            Label::Added => added.clone(),
            Label::Changed => changed.clone(),
            Label::Removed => removed.clone(),
            Label::Shared => common.clone(),
            Label::Unchanged => unchanged.clone(),
        };
        report.insert(*label, paths);
    }
    Ok(report)
}

/// Split the files among `common` into changed and unchanged. Directories
/// are never checked
fn detect_changes<D: ChangeDetector + ?Sized>(
    common: &[RelPath],
    before_root: &AbstPath,
    after_root: &AbstPath,
    detector: &D,
) -> Result<(Vec<RelPath>, Vec<RelPath>), Error> {
    let mut changed: Vec<RelPath> = Vec::new();
    let mut unchanged: Vec<RelPath> = Vec::new();
    for path in common.iter().filter(|path| !path.is_dir()) {
        let components = path.components();
        if detector.differ(&before_root.append(components), &after_root.append(components))? {
            changed.push(path.clone());
        } else {
            unchanged.push(path.clone());
        }
    }
    Ok((changed, unchanged))
}

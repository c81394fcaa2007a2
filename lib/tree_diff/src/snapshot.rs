use super::{
    error::{error_context, inerr},
    Error, ExcludeList, RelPath,
};

use abst_fs::{AbstPath, ObjectType, WalkEntry};
use std::ffi::OsString;
use tracing::debug;

/// One capture of the structure of a directory tree: the walk entries of the
/// tree, parents before children. Never modified once taken
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    root: AbstPath,
    entries: Vec<WalkEntry>,
}

impl Snapshot {
    pub fn new(root: AbstPath, entries: Vec<WalkEntry>) -> Snapshot {
        Snapshot { root, entries }
    }

    /// Walk the tree at `root`, following symbolic links, and drop every
    /// object matched by the exclude list together with its whole subtree
    pub fn capture(root: &AbstPath, exclude_list: &ExcludeList) -> Result<Snapshot, Error> {
        if root.object_type() != Some(ObjectType::Dir) {
            return Err(Error::NonDirRoot { path: root.clone() });
        }
        let errctx = error_context(format!("could not take snapshot of tree at path {root}"));
        let entries = abst_fs::walk(root, true).map_err(inerr(errctx("walk tree")))?;

        let snapshot = Snapshot::new(root.clone(), entries).filtered(exclude_list);
        debug!(
            root = %root,
            dirs = snapshot.entries.len(),
            files = snapshot.file_count(),
            "snapshot captured"
        );
        Ok(snapshot)
    }

    pub fn root(&self) -> &AbstPath {
        &self.root
    }
    pub fn entries(&self) -> &[WalkEntry] {
        &self.entries
    }
    pub fn file_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.files.len()).sum()
    }
    /// Absolute path of every file of the snapshot, in walk order
    pub fn files(&self) -> impl Iterator<Item = AbstPath> + '_ {
        self.entries
            .iter()
            .flat_map(|entry| entry.files.iter().map(|name| entry.dir.add_last(name)))
    }

    fn filtered(self, exclude_list: &ExcludeList) -> Snapshot {
        if exclude_list.is_empty() {
            return self;
        }
        let Snapshot { root, entries } = self;

        let mut excluded_dirs: Vec<AbstPath> = Vec::new();
        let mut kept: Vec<WalkEntry> = Vec::new();
        for entry in entries {
            // Parents come first, so an excluded directory is always known
            //	before its content is reached
            if excluded_dirs.iter().any(|dir| entry.dir.starts_with(dir)) {
                continue;
            }
            let rel_dir = entry.dir.strip_prefix(&root).unwrap_or_else(AbstPath::empty);
            let excluded = |name: &OsString, is_dir: bool| {
                exclude_list.should_exclude(&RelPath::new(&rel_dir.add_last(name), is_dir))
            };

            let (dropped, dirs): (Vec<OsString>, Vec<OsString>) =
                entry.dirs.into_iter().partition(|name| excluded(name, true));
            excluded_dirs.extend(dropped.iter().map(|name| entry.dir.add_last(name)));
            let files = entry
                .files
                .into_iter()
                .filter(|name| !excluded(name, false))
                .collect();

            kept.push(WalkEntry {
                dir: entry.dir,
                dirs,
                files,
            });
        }

        Snapshot {
            root,
            entries: kept,
        }
    }
}

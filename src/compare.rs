use crate::model::Settings;

use abst_fs::AbstPath;
use tree_diff::{render_full, Report, Snapshot};

use anyhow::{Context, Result};

pub fn compare(left: &AbstPath, right: &AbstPath, settings: &Settings) -> Result<()> {
    let report = diff(left, right, settings)?;
    println!("{}", render_full(&report));
    Ok(())
}

fn diff(left: &AbstPath, right: &AbstPath, settings: &Settings) -> Result<Report> {
    let before = Snapshot::capture(left, &settings.exclude_list)
        .with_context(|| format!("could not scan directory [{left}]"))?;
    let after = Snapshot::capture(right, &settings.exclude_list)
        .with_context(|| format!("could not scan directory [{right}]"))?;

    tree_diff::compare(&settings.flags, &before, &after, settings.mode)
        .with_context(|| format!("could not compare [{left}] to [{right}]"))
}

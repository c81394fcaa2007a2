use super::RelPath;

use std::collections::HashSet;

/// Partition of the paths of two listings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Classification {
    /// Only in the second listing, in its order
    pub added: Vec<RelPath>,
    /// Only in the first listing, in its order
    pub removed: Vec<RelPath>,
    /// In both listings, in the order of the second one
    pub common: Vec<RelPath>,
}

pub fn classify(before: &[RelPath], after: &[RelPath]) -> Classification {
    let before_set: HashSet<&RelPath> = before.iter().collect();
    let after_set: HashSet<&RelPath> = after.iter().collect();

    let (common, added): (Vec<RelPath>, Vec<RelPath>) = after
        .iter()
        .cloned()
        .partition(|path| before_set.contains(path));
    let removed = before
        .iter()
        .filter(|path| !after_set.contains(path))
        .cloned()
        .collect();

    Classification {
        added,
        removed,
        common,
    }
}

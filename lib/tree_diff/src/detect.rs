use super::{
    error::{error_context, inerr},
    fingerprint, Error, FingerprintMap, Mode,
};

use abst_fs::AbstPath;

/// Decides whether a file present in both trees has changed.
///
/// `before` is the path of the file in the first tree and `after` the path of
/// the same relative file in the second tree
pub trait ChangeDetector {
    fn differ(&self, before: &AbstPath, after: &AbstPath) -> Result<bool, Error>;
}

/// Compare sizes first and, only when they match, the checksums or the
/// modification times of the two files
pub struct Cascade {
    mode: Mode,
}
impl Cascade {
    pub fn new(mode: Mode) -> Cascade {
        Cascade { mode }
    }
}
impl ChangeDetector for Cascade {
    fn differ(&self, before: &AbstPath, after: &AbstPath) -> Result<bool, Error> {
        let errctx = error_context(format!("could not compare file {before} to file {after}"));
        let size_before = abst_fs::file_size(before).map_err(inerr(errctx("get size of file")))?;
        let size_after = abst_fs::file_size(after).map_err(inerr(errctx("get size of file")))?;
        if size_before != size_after {
            return Ok(true);
        }

        Ok(fingerprint(before, self.mode)? != fingerprint(after, self.mode)?)
    }
}

/// Look both files up in fingerprint maps built beforehand. A file missing
/// from either map counts as unchanged
pub struct MapLookup<'a> {
    before: &'a FingerprintMap,
    after: &'a FingerprintMap,
}
impl<'a> MapLookup<'a> {
    pub fn new(before: &'a FingerprintMap, after: &'a FingerprintMap) -> MapLookup<'a> {
        MapLookup { before, after }
    }
}
impl ChangeDetector for MapLookup<'_> {
    fn differ(&self, before: &AbstPath, after: &AbstPath) -> Result<bool, Error> {
        match (self.before.get(before), self.after.get(after)) {
            (Some(print_before), Some(print_after)) => Ok(print_before != print_after),
            _ => Ok(false),
        }
    }
}

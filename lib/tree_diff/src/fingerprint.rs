use super::{
    error::{error_context, inerr},
    Error, Snapshot,
};

use abst_fs::{AbstPath, Mtime};
use hasher::Hash;
use std::collections::HashMap;
use tracing::debug;

/// Which property of a file stands for its content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Checksum,
    Mtime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fingerprint {
    Checksum(Hash),
    Mtime(Mtime),
}

/// Absolute path of every file of a snapshot to its fingerprint
pub type FingerprintMap = HashMap<AbstPath, Fingerprint>;

pub fn fingerprint(path: &AbstPath, mode: Mode) -> Result<Fingerprint, Error> {
    let errctx = error_context(format!("could not fingerprint file at path {path}"));
    match mode {
        Mode::Checksum => hasher::hash_file(path.to_path_buf())
            .map(Fingerprint::Checksum)
            .map_err(inerr(errctx("hash file content"))),
        Mode::Mtime => abst_fs::get_mtime(path)
            .map(Fingerprint::Mtime)
            .map_err(inerr(errctx("get mtime"))),
    }
}

/// Fingerprint every file of the snapshot. The first unreadable file aborts
/// the whole map
pub fn fingerprint_map(snapshot: &Snapshot, mode: Mode) -> Result<FingerprintMap, Error> {
    let mut map = FingerprintMap::new();
    for path in snapshot.files() {
        let print = fingerprint(&path, mode)?;
        map.insert(path, print);
    }
    debug!(root = %snapshot.root(), files = map.len(), ?mode, "fingerprint map built");
    Ok(map)
}

pub fn checksum_map(snapshot: &Snapshot) -> Result<FingerprintMap, Error> {
    fingerprint_map(snapshot, Mode::Checksum)
}

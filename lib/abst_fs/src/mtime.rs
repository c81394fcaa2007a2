use super::{error_context, inerr, AbstPath, Error};

/// Last modification time, as seconds and nanoseconds since the unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mtime(i64, u32);

impl Mtime {
    pub const fn from(time: i64, nanoseconds: u32) -> Mtime {
        Mtime(time, nanoseconds)
    }
}

impl std::fmt::Display for Mtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match chrono::DateTime::from_timestamp(self.0, self.1) {
            Some(timestamp) => write!(f, "{}", timestamp.naive_utc()),
            None => write!(f, "{}.{:09}", self.0, self.1),
        }
    }
}

/// Get mtime of an object, following symbolic links
///
/// Returns an error if the std::fs fails to retrieve metadata
/// from the specified path, in which case it returns the
/// wrapped error
pub fn get_mtime(path: &AbstPath) -> Result<Mtime, Error> {
    let errctx = error_context(format!("could not get mtime from path {path}"));
    let metadata =
        std::fs::metadata(path.to_path_buf()).map_err(inerr(errctx("get metadata of object")))?;
    let mtime = filetime::FileTime::from_last_modification_time(&metadata);

    Ok(Mtime(mtime.unix_seconds(), mtime.nanoseconds()))
}

/// Set mtime of an object, following symbolic links. The access time is left
/// untouched
pub fn set_mtime(path: &AbstPath, mtime: &Mtime) -> Result<(), Error> {
    let errctx = error_context(format!("could not set mtime at path {path}"));
    let mtime = filetime::FileTime::from_unix_time(mtime.0, mtime.1);

    filetime::set_file_mtime(path.to_path_buf(), mtime).map_err(inerr(errctx("set mtime")))
}

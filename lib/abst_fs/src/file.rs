use super::{error_context, inerr, wrgobj, AbstPath, Error, ObjectType};

/// Size in bytes of the file at path, following symbolic links
pub fn file_size(path: &AbstPath) -> Result<u64, Error> {
    let errmsg = format!("could not get size of file at path {path}");
    let errctx = error_context(errmsg.clone());
    match path.object_type() {
        Some(ObjectType::File) => { /* ... */ }
        Some(ObjectType::Dir) => {
            return Err(wrgobj(
                errmsg + "\nPath is a directory",
                "object is not a file",
            ));
        }
        _ => {
            return Err(wrgobj(
                errmsg + "\nFile doesn't exist",
                "object doesn't exist",
            ));
        }
    }
    let metadata =
        std::fs::metadata(path.to_path_buf()).map_err(inerr(errctx("get metadata of file")))?;
    Ok(metadata.len())
}

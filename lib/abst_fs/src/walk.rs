use super::{error_context, inerr, wrgobj, AbstPath, Error, ObjectType};

use std::{ffi::OsString, path::PathBuf};

/// One directory visited by [`walk`]: the directory itself and the names of
/// the subdirectories and files directly inside it
#[derive(Debug, Clone, PartialEq)]
pub struct WalkEntry {
    pub dir: AbstPath,
    pub dirs: Vec<OsString>,
    pub files: Vec<OsString>,
}

/// Walk the tree rooted at `root` top-down, returning one entry per directory
/// with the parent always listed before its children. Names inside an entry
/// are sorted so that two walks of the same tree are identical.
///
/// With `follow_links`, symbolic links pointing to directories are listed as
/// directories and descended into; links pointing nowhere are listed as files.
/// Any error met along the way aborts the whole walk, nothing is skipped.
pub fn walk(root: &AbstPath, follow_links: bool) -> Result<Vec<WalkEntry>, Error> {
    let errmsg = format!("could not walk tree at path {root}");
    match root.object_type() {
        Some(ObjectType::Dir) => { /* ... */ }
        None | Some(ObjectType::BrokenLink) => {
            return Err(wrgobj(
                errmsg + "\nDirectory doesn't exist",
                "object doesn't exist",
            ));
        }
        Some(ObjectType::File) => {
            return Err(wrgobj(
                errmsg + "\nPath is not a dir",
                "object is not a directory",
            ));
        }
    }

    let mut entries: Vec<WalkEntry> = Vec::new();
    let mut ancestors: Vec<PathBuf> = Vec::new();
    walk_rec(root, follow_links, &mut ancestors, &mut entries)?;
    Ok(entries)
}

fn walk_rec(
    path: &AbstPath,
    follow_links: bool,
    ancestors: &mut Vec<PathBuf>,
    entries: &mut Vec<WalkEntry>,
) -> Result<(), Error> {
    let errctx = error_context(format!("could not walk subtree at path {path}"));

    let canonical = std::fs::canonicalize(path.to_path_buf())
        .map_err(inerr(errctx("resolve canonical path")))?;
    if ancestors.contains(&canonical) {
        return Err(Error::SymlinkCycle {
            path: path.to_string(),
        });
    }

    let mut dirs: Vec<OsString> = Vec::new();
    let mut files: Vec<OsString> = Vec::new();
    let mut descend: Vec<OsString> = Vec::new();

    let read_dir = std::fs::read_dir(path.to_path_buf()).map_err(inerr(errctx("read dir")))?;
    for entry in read_dir {
        let entry = entry.map_err(inerr(errctx("retrieve value of entry")))?;
        let name = entry.file_name();
        let file_type = entry.file_type().map_err(inerr(errctx(
            format!("get type of child {}", name.to_string_lossy()).as_str(),
        )))?;

        let is_link = file_type.is_symlink();
        let is_dir = match is_link {
            // A dangling link fails to resolve and lands among the files
            true => std::fs::metadata(entry.path())
                .map(|metadata| metadata.is_dir())
                .unwrap_or(false),
            false => file_type.is_dir(),
        };

        if is_dir {
            if !is_link || follow_links {
                descend.push(name.clone());
            }
            dirs.push(name);
        } else {
            files.push(name);
        }
    }
    dirs.sort();
    files.sort();
    descend.sort();

    entries.push(WalkEntry {
        dir: path.clone(),
        dirs,
        files,
    });

    ancestors.push(canonical);
    for name in descend {
        walk_rec(&path.add_last(name), follow_links, ancestors, entries)?;
    }
    ancestors.pop();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{walk, AbstPath, Error, WalkEntry};
    use std::ffi::OsString;

    fn entry(dir: &AbstPath, dirs: &[&str], files: &[&str]) -> WalkEntry {
        WalkEntry {
            dir: dir.clone(),
            dirs: dirs.iter().map(OsString::from).collect(),
            files: files.iter().map(OsString::from).collect(),
        }
    }

    #[test]
    fn top_down() {
        let sandbox = tempfile::TempDir::new().unwrap();
        let root = AbstPath::from(sandbox.path());

        std::fs::create_dir_all(root.add_last("b").add_last("inner").to_path_buf()).unwrap();
        std::fs::create_dir(root.add_last("a").to_path_buf()).unwrap();
        std::fs::write(root.add_last("z.txt").to_path_buf(), b"z").unwrap();
        std::fs::write(root.add_last("b").add_last("y.txt").to_path_buf(), b"y").unwrap();

        let walked = walk(&root, true).unwrap();
        assert_eq!(
            walked,
            vec![
                entry(&root, &["a", "b"], &["z.txt"]),
                entry(&root.add_last("a"), &[], &[]),
                entry(&root.add_last("b"), &["inner"], &["y.txt"]),
                entry(&root.add_last("b").add_last("inner"), &[], &[]),
            ]
        );

        // Walking twice gives the same result
        assert_eq!(walk(&root, true).unwrap(), walked);
    }

    #[test]
    fn not_a_directory() {
        let sandbox = tempfile::TempDir::new().unwrap();
        let root = AbstPath::from(sandbox.path());
        let file = root.add_last("file");
        std::fs::write(file.to_path_buf(), b"content").unwrap();

        assert!(walk(&file, true).is_err());
        assert!(walk(&root.add_last("missing"), true).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn links() {
        let sandbox = tempfile::TempDir::new().unwrap();
        let root = AbstPath::from(sandbox.path());
        let target = tempfile::TempDir::new().unwrap();
        std::fs::write(target.path().join("inside.txt"), b"inside").unwrap();

        std::os::unix::fs::symlink(target.path(), root.add_last("linked").to_path_buf())
            .unwrap();
        std::os::unix::fs::symlink("does/not/exist", root.add_last("dangling").to_path_buf())
            .unwrap();

        let followed = walk(&root, true).unwrap();
        assert_eq!(
            followed,
            vec![
                entry(&root, &["linked"], &["dangling"]),
                entry(&root.add_last("linked"), &[], &["inside.txt"]),
            ]
        );

        let not_followed = walk(&root, false).unwrap();
        assert_eq!(not_followed, vec![entry(&root, &["linked"], &["dangling"])]);
    }

    #[cfg(unix)]
    #[test]
    fn names_are_not_altered() {
        use std::os::unix::ffi::OsStrExt;

        let sandbox = tempfile::TempDir::new().unwrap();
        let root = AbstPath::from(sandbox.path());
        let name = std::ffi::OsStr::from_bytes(b"bad\xffname");
        std::fs::write(sandbox.path().join(name), b"content").unwrap();

        let walked = walk(&root, true).unwrap();
        assert_eq!(walked[0].files, vec![name.to_os_string()]);
        assert!(root.add_last(&walked[0].files[0]).exists());
    }

    #[cfg(unix)]
    #[test]
    fn link_cycle() {
        let sandbox = tempfile::TempDir::new().unwrap();
        let root = AbstPath::from(sandbox.path());
        let sub = root.add_last("sub");
        std::fs::create_dir(sub.to_path_buf()).unwrap();
        std::os::unix::fs::symlink(sandbox.path(), sub.add_last("back").to_path_buf()).unwrap();

        assert!(matches!(walk(&root, true), Err(Error::SymlinkCycle { .. })));
        assert!(walk(&root, false).is_ok());
    }
}

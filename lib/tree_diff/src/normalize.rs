use super::Snapshot;

use abst_fs::AbstPath;
use std::path::MAIN_SEPARATOR;

/// A path listed in a snapshot, still carrying the snapshot root
#[derive(Debug, Clone, PartialEq)]
pub struct ListedPath {
    pub path: AbstPath,
    pub is_dir: bool,
}

/// A path relative to the root of its snapshot, in its string form.
/// Directories end with the path separator so that a directory and a file
/// with the same name never compare equal.
///
/// The string form only serves display, sorting and exclusion. The
/// components are kept untouched next to it and are what leads back to disk
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelPath {
    text: String,
    components: AbstPath,
}
impl RelPath {
    pub fn new(path: &AbstPath, is_dir: bool) -> RelPath {
        let mut text = path.join_with(MAIN_SEPARATOR);
        if is_dir {
            text.push(MAIN_SEPARATOR);
        }
        RelPath {
            text,
            components: path.clone(),
        }
    }
    pub fn as_str(&self) -> &str {
        &self.text
    }
    pub fn is_dir(&self) -> bool {
        self.text.ends_with(MAIN_SEPARATOR)
    }
    /// Components of the relative path, to be appended to a snapshot root
    pub fn components(&self) -> &AbstPath {
        &self.components
    }
}
impl std::fmt::Display for RelPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Flat listing of every file and directory of the snapshot, in walk order.
/// At every level the files come first, then the subdirectories
pub fn flatten(snapshot: &Snapshot) -> Vec<ListedPath> {
    let mut listing: Vec<ListedPath> = Vec::new();
    for entry in snapshot.entries() {
        listing.extend(entry.files.iter().map(|name| ListedPath {
            path: entry.dir.add_last(name),
            is_dir: false,
        }));
        listing.extend(entry.dirs.iter().map(|name| ListedPath {
            path: entry.dir.add_last(name),
            is_dir: true,
        }));
    }
    listing
}

/// Remove from every path the longest run of leading components shared by
/// `root` and all the paths.
///
/// Prefixes are compared a whole component at a time, so a root `/tmp/foo`
/// never eats into a sibling `/tmp/foobar`
pub fn strip_root(root: &AbstPath, paths: &[ListedPath]) -> Vec<RelPath> {
    let prefix_len = paths
        .iter()
        .map(|listed| common_len(root, &listed.path))
        .min()
        .unwrap_or(root.len());

    paths
        .iter()
        .map(|listed| {
            let relative: AbstPath = (&listed.path)
                .into_iter()
                .skip(prefix_len)
                .cloned()
                .collect();
            RelPath::new(&relative, listed.is_dir)
        })
        .collect()
}

fn common_len(left: &AbstPath, right: &AbstPath) -> usize {
    left.into_iter()
        .zip(right)
        .take_while(|(l, r)| l == r)
        .count()
}

#[cfg(test)]
mod tests {
    use super::{flatten, strip_root, ListedPath, RelPath};
    use crate::Snapshot;
    use abst_fs::{AbstPath, WalkEntry};
    use std::ffi::OsString;

    fn names(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }
    fn listed(path: &str, is_dir: bool) -> ListedPath {
        ListedPath {
            path: AbstPath::from(path),
            is_dir,
        }
    }

    #[test]
    fn rel_path() {
        let dir = RelPath::new(&AbstPath::from("a/b"), true);
        let file = RelPath::new(&AbstPath::from("a/b"), false);
        assert_ne!(dir, file);
        assert!(dir.is_dir());
        assert!(!file.is_dir());
        assert_eq!(dir.components(), file.components());
        assert_eq!(dir.components(), &AbstPath::from("a/b"));
        #[cfg(unix)]
        {
            assert_eq!(dir.as_str(), "a/b/");
            assert_eq!(file.to_string(), "a/b");
        }
    }

    #[test]
    fn flatten_in_walk_order() {
        let root = AbstPath::from("/data/root");
        let snapshot = Snapshot::new(
            root.clone(),
            vec![
                WalkEntry {
                    dir: root.clone(),
                    dirs: names(&["sub"]),
                    files: names(&["b.txt", "a.txt"]),
                },
                WalkEntry {
                    dir: root.add_last("sub"),
                    dirs: names(&[]),
                    files: names(&["c.txt"]),
                },
            ],
        );

        assert_eq!(
            flatten(&snapshot),
            vec![
                listed("/data/root/b.txt", false),
                listed("/data/root/a.txt", false),
                listed("/data/root/sub", true),
                listed("/data/root/sub/c.txt", false),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn strip() {
        let root = AbstPath::from("/data/root");
        let paths = vec![
            listed("/data/root/b.txt", false),
            listed("/data/root/sub", true),
            listed("/data/root/sub/c.txt", false),
        ];
        let stripped: Vec<String> = strip_root(&root, &paths)
            .into_iter()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(stripped, vec!["b.txt", "sub/", "sub/c.txt"]);

        assert!(strip_root(&root, &[]).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn strip_does_not_cut_inside_a_component() {
        // A raw string prefix of "/data/foo" and "/data/foobar/x" would be
        // "/data/foo" and leave "bar/x" behind
        let root = AbstPath::from("/data/foo");
        let paths = vec![listed("/data/foobar/x", false)];
        let stripped: Vec<String> = strip_root(&root, &paths)
            .into_iter()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(stripped, vec!["foobar/x"]);
    }

    #[cfg(unix)]
    #[test]
    fn names_differing_only_in_invalid_bytes_stay_apart() {
        use std::os::unix::ffi::OsStrExt;

        let root = AbstPath::from("/data/root");
        let first = root.add_last(std::ffi::OsStr::from_bytes(b"bad\xffname"));
        let second = root.add_last(std::ffi::OsStr::from_bytes(b"bad\xfename"));
        let stripped = strip_root(
            &root,
            &[
                ListedPath {
                    path: first.clone(),
                    is_dir: false,
                },
                ListedPath {
                    path: second,
                    is_dir: false,
                },
            ],
        );

        assert_eq!(stripped[0].as_str(), stripped[1].as_str());
        assert_ne!(stripped[0], stripped[1]);
        assert_eq!(root.append(stripped[0].components()), first);
    }
}

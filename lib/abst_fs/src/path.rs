use std::{
    collections::VecDeque,
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

trait LossyToString {
    fn lossy_to_string(&self) -> String;
}
impl LossyToString for OsStr {
    fn lossy_to_string(&self) -> String {
        self.to_string_lossy().into_owned()
    }
}

#[derive(PartialEq, Debug)]
pub enum ObjectType {
    File,
    /// Symbolic link whose endpoint doesn't exist
    BrokenLink,
    Dir,
}

/// A path stored as its list of components.
///
/// Working on components instead of on the string representation means that
/// prefixes are always matched on whole components: `/tmp/foo` is a prefix of
/// `/tmp/foo/bar` but not of `/tmp/foobar`. Components are kept as the
/// operating system gave them, so names that aren't valid UTF-8 still lead
/// back to the right object on disk
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AbstPath(VecDeque<OsString>);
impl AbstPath {
    pub fn empty() -> AbstPath {
        AbstPath(VecDeque::new())
    }
    pub fn single<S: AsRef<OsStr>>(path: S) -> AbstPath {
        AbstPath(VecDeque::from([path.as_ref().to_os_string()]))
    }
    pub fn from<T: AsRef<Path>>(path: T) -> AbstPath {
        let components: VecDeque<OsString> = path
            .as_ref()
            .components()
            .map(|comp| comp.as_os_str().to_os_string())
            .collect();

        AbstPath(components)
    }
    pub fn to_path_buf(&self) -> PathBuf {
        let AbstPath(abst_path) = self;
        PathBuf::from_iter(abst_path)
    }

    pub fn len(&self) -> usize {
        let AbstPath(path) = self;
        path.len()
    }
    pub fn is_empty(&self) -> bool {
        let AbstPath(path) = self;
        path.is_empty()
    }

    pub fn add_last<S: AsRef<OsStr>>(&self, suffix: S) -> AbstPath {
        let AbstPath(mut path) = self.clone();
        path.push_back(suffix.as_ref().to_os_string());
        AbstPath(path)
    }
    pub fn append(&self, AbstPath(appendix): &AbstPath) -> AbstPath {
        let AbstPath(mut path) = self.clone();
        path.extend(appendix.iter().cloned());
        AbstPath(path)
    }

    /// Whether every component of `prefix` matches, in order, the first
    /// components of `self`
    pub fn starts_with(&self, AbstPath(prefix): &AbstPath) -> bool {
        let AbstPath(path) = self;
        prefix.len() <= path.len() && prefix.iter().zip(path.iter()).all(|(p, s)| p == s)
    }
    /// Remove `prefix` from the front of the path, if `self` starts with it
    pub fn strip_prefix(&self, prefix: &AbstPath) -> Option<AbstPath> {
        if !self.starts_with(prefix) {
            return None;
        }
        let AbstPath(path) = self;
        Some(AbstPath(path.iter().skip(prefix.len()).cloned().collect()))
    }

    pub fn file_name(&self) -> Option<String> {
        Some(self.to_path_buf().file_name()?.lossy_to_string())
    }

    pub fn exists(&self) -> bool {
        let path = self.to_path_buf();
        path.is_symlink() || path.exists()
    }
    /// Type of the object at path, following symbolic links
    pub fn object_type(&self) -> Option<ObjectType> {
        let path = self.to_path_buf();

        if path.is_dir() {
            Some(ObjectType::Dir)
        } else if path.exists() {
            Some(ObjectType::File)
        } else if path.is_symlink() {
            Some(ObjectType::BrokenLink)
        } else {
            None
        }
    }

    /// Join the components with the given separator, without any leading or
    /// trailing separator. Invalid UTF-8 is replaced, so the result is only
    /// meant to be shown or matched, never opened
    pub fn join_with(&self, separator: char) -> String {
        let AbstPath(path) = self;
        path.iter()
            .map(|comp| comp.lossy_to_string())
            .collect::<Vec<String>>()
            .join(&separator.to_string())
    }
}
impl FromIterator<OsString> for AbstPath {
    fn from_iter<I: IntoIterator<Item = OsString>>(iter: I) -> Self {
        AbstPath(iter.into_iter().collect())
    }
}
impl IntoIterator for AbstPath {
    type Item = OsString;
    type IntoIter = std::collections::vec_deque::IntoIter<OsString>;

    fn into_iter(self) -> Self::IntoIter {
        let AbstPath(path) = self;
        path.into_iter()
    }
}
impl<'a> IntoIterator for &'a AbstPath {
    type Item = &'a OsString;
    type IntoIter = std::collections::vec_deque::Iter<'a, OsString>;

    fn into_iter(self) -> Self::IntoIter {
        let AbstPath(path) = self;
        path.iter()
    }
}
impl std::fmt::Display for AbstPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path_buf().display())
    }
}

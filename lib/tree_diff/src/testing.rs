use abst_fs::{AbstPath, Mtime};
use tempfile::TempDir;

/// Temporary directory tree for tests, removed on drop
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Sandbox {
        Sandbox {
            dir: TempDir::new().unwrap(),
        }
    }
    pub fn root(&self) -> AbstPath {
        AbstPath::from(self.dir.path())
    }
    pub fn path(&self, rel: &str) -> AbstPath {
        self.root().append(&AbstPath::from(rel))
    }
    pub fn write(&self, rel: &str, content: &str) {
        let path = self.path(rel).to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }
    pub fn mkdir(&self, rel: &str) {
        std::fs::create_dir_all(self.path(rel).to_path_buf()).unwrap();
    }
    pub fn remove(&self, rel: &str) {
        let path = self.path(rel).to_path_buf();
        if path.is_dir() {
            std::fs::remove_dir_all(path).unwrap();
        } else {
            std::fs::remove_file(path).unwrap();
        }
    }
    pub fn set_mtime(&self, rel: &str, mtime: Mtime) {
        abst_fs::set_mtime(&self.path(rel), &mtime).unwrap();
    }
}

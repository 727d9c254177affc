use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ServerFilesystem;

/// In-memory server filesystem for testing.
#[derive(Debug, Default)]
pub struct MemoryFilesystem {
    pub files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    read_only: RefCell<BTreeSet<PathBuf>>,
}

#[allow(dead_code)]
impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.dirs.borrow_mut().insert(path.into());
        self
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.borrow_mut().insert(path.into(), content.to_string());
        self
    }

    /// Make writes and copies onto `path` fail with `PermissionDenied`.
    pub fn with_read_only(self, path: impl Into<PathBuf>) -> Self {
        self.read_only.borrow_mut().insert(path.into());
        self
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.files.borrow().len()
    }

    fn check_writable(&self, path: &Path) -> Result<(), AppError> {
        if self.read_only.borrow().contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied").into());
        }
        Ok(())
    }
}

impl ServerFilesystem for MemoryFilesystem {
    fn path_exists(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path) || self.files.borrow().contains_key(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.check_writable(path)?;
        self.files.borrow_mut().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        self.check_writable(to)?;
        let content = self.read(from).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} not found", from.display()))
        })?;
        self.files.borrow_mut().insert(to.to_path_buf(), content);
        Ok(())
    }
}

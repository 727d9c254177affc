use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ServerFilesystem;

/// `ServerFilesystem` backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl ServerFilesystem for LocalFilesystem {
    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        log::debug!("writing {} bytes to {}", content.len(), path.display());
        fs::write(path, content)?;
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        log::debug!("copying {} to {}", from.display(), to.display());
        fs::copy(from, to)?;
        Ok(())
    }
}

use std::path::Path;

use crate::domain::AppError;

/// Port for the parts of the server filesystem the tool touches.
pub trait ServerFilesystem {
    /// Check whether a file or directory exists at `path`.
    fn path_exists(&self, path: &Path) -> bool;

    /// Write `content` to `path`, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Copy `from` onto `to`, replacing any existing file.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError>;
}

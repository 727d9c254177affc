use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for apache-node-proxy operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Project path given by the user does not exist.
    #[error("Project path does not exist")]
    InvalidProjectPath(String),

    /// Port is not a number in 1..=65535.
    #[error("Port must be between 1 and 65535")]
    InvalidPort(String),

    /// Application name contains characters outside `[a-zA-Z0-9-_]`.
    #[error("App name can only contain letters, numbers, hyphens, and underscores")]
    InvalidAppName(String),

    /// Process is not running as root.
    #[error("This tool requires root privileges. Please run with sudo.")]
    NotElevated,

    /// Base installation directory is missing.
    #[error(
        "Bitnami installation not found. This tool is designed for Bitnami Apache installations."
    )]
    InstallationNotFound(PathBuf),

    /// Apache configuration directory is missing.
    #[error("Apache configuration directory not found.")]
    ConfDirNotFound(PathBuf),

    /// Project directory disappeared or was never there.
    #[error("Project directory does not exist: {}", .0.display())]
    ProjectDirNotFound(PathBuf),

    /// Restart command failed to spawn or exited non-zero.
    #[error("Failed to restart Apache. Please restart manually using: sudo {command}")]
    RestartFailed { command: String },

    /// Layout override file could not be read.
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Layout override file is not valid TOML or has unknown keys.
    #[error("Invalid config {}: {details}", .path.display())]
    ConfigParse { path: PathBuf, details: String },

    /// Template registration or rendering failed.
    #[error("Failed to render template '{name}': {details}")]
    Template { name: String, details: String },

    /// Interactive prompt could not read an answer.
    #[error("Failed to read {what}: {details}")]
    Prompt { what: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ConfigRead { source, .. } => source.kind(),
            AppError::Configuration(_)
            | AppError::InvalidProjectPath(_)
            | AppError::InvalidPort(_)
            | AppError::InvalidAppName(_)
            | AppError::ConfigParse { .. }
            | AppError::Template { .. } => io::ErrorKind::InvalidInput,
            AppError::NotElevated => io::ErrorKind::PermissionDenied,
            AppError::InstallationNotFound(_)
            | AppError::ConfDirNotFound(_)
            | AppError::ProjectDirNotFound(_) => io::ErrorKind::NotFound,
            AppError::Prompt { .. } => io::ErrorKind::Interrupted,
            AppError::RestartFailed { .. } => io::ErrorKind::Other,
        }
    }
}

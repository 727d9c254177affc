use crate::domain::AppError;

/// Port for restarting the web server.
pub trait ServiceControl {
    /// Run `command` to completion with the console attached.
    ///
    /// Fails with `AppError::RestartFailed` when the command cannot be
    /// spawned or exits non-zero.
    fn restart(&self, command: &[String]) -> Result<(), AppError>;
}

use std::process::Command;

use crate::domain::AppError;
use crate::ports::ServiceControl;

/// Restarts the web server by running an external command with inherited stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestartCommandAdapter;

impl RestartCommandAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl ServiceControl for RestartCommandAdapter {
    fn restart(&self, command: &[String]) -> Result<(), AppError> {
        let failed = || AppError::RestartFailed { command: command.join(" ") };
        let (program, args) = command.split_first().ok_or_else(failed)?;

        log::debug!("running restart command: {}", command.join(" "));
        let status = Command::new(program).args(args).status().map_err(|e| {
            log::warn!("failed to spawn {}: {}", program, e);
            failed()
        })?;

        if !status.success() {
            log::warn!("restart command exited with {}", status);
            return Err(failed());
        }

        Ok(())
    }
}

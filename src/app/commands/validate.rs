//! Environment preconditions checked before anything is written.

use crate::app::AppContext;
use crate::domain::{AppError, Configuration};
use crate::ports::{PrivilegeCheck, ServerFilesystem, ServiceControl};

/// Check, in order: root privileges, base install dir, Apache conf dir, project dir.
pub fn execute<P, F, S>(ctx: &AppContext<P, F, S>, config: &Configuration) -> Result<(), AppError>
where
    P: PrivilegeCheck,
    F: ServerFilesystem,
    S: ServiceControl,
{
    if !ctx.privileges().is_elevated() {
        return Err(AppError::NotElevated);
    }

    let layout = ctx.layout();
    let fs = ctx.filesystem();

    if !fs.path_exists(&layout.base_dir) {
        return Err(AppError::InstallationNotFound(layout.base_dir.clone()));
    }

    if !fs.path_exists(&layout.conf_dir) {
        return Err(AppError::ConfDirNotFound(layout.conf_dir.clone()));
    }

    if !fs.path_exists(config.project_path()) {
        return Err(AppError::ProjectDirNotFound(config.project_path().to_path_buf()));
    }

    Ok(())
}

//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::adapters::{EffectiveUidCheck, LocalFilesystem, RestartCommandAdapter};
use crate::app::{
    AppContext,
    commands::{collect, configure},
};

pub use crate::app::commands::collect::RawConfiguration;
pub use crate::app::commands::configure::ConfigureOutcome;
pub use crate::app::commands::vhosts::VhostChange;
pub use crate::app::config::load_layout;
pub use crate::domain::{AppError, Configuration, InstallLayout};

/// Create an `AppContext` wired to the real system.
fn create_context(
    layout: InstallLayout,
) -> AppContext<EffectiveUidCheck, LocalFilesystem, RestartCommandAdapter> {
    AppContext::new(
        layout,
        EffectiveUidCheck::new(),
        LocalFilesystem::new(),
        RestartCommandAdapter::new(),
    )
}

/// Validate raw field values, resolving relative paths against the current directory.
pub fn build_configuration(raw: RawConfiguration) -> Result<Configuration, AppError> {
    build_configuration_in(raw, &std::env::current_dir()?)
}

/// Validate raw field values, resolving relative paths against `cwd`.
pub fn build_configuration_in(
    raw: RawConfiguration,
    cwd: &Path,
) -> Result<Configuration, AppError> {
    collect::build(raw, cwd)
}

/// Validate the environment, write vhosts, and restart Apache.
pub fn configure(
    config: &Configuration,
    layout: InstallLayout,
) -> Result<ConfigureOutcome, AppError> {
    let ctx = create_context(layout);
    configure::execute(&ctx, config)
}

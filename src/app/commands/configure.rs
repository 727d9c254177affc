//! The full Validate → Write → Restart run.

use crate::app::AppContext;
use crate::domain::{AppError, Configuration};
use crate::ports::{PrivilegeCheck, ServerFilesystem, ServiceControl};

use super::validate;
use super::vhosts::{self, VhostChange};

/// What a successful run changed on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureOutcome {
    pub changes: Vec<VhostChange>,
}

impl ConfigureOutcome {
    pub fn warnings(&self) -> impl Iterator<Item = &VhostChange> {
        self.changes.iter().filter(|change| change.is_warning())
    }
}

/// Execute the configure command.
///
/// Each step short-circuits the rest on failure. Files written before a
/// failed restart are left in place.
pub fn execute<P, F, S>(
    ctx: &AppContext<P, F, S>,
    config: &Configuration,
) -> Result<ConfigureOutcome, AppError>
where
    P: PrivilegeCheck,
    F: ServerFilesystem,
    S: ServiceControl,
{
    println!("\n🔍 Validating configuration...");
    validate::execute(ctx, config)?;
    println!("✅ Configuration validation passed");

    println!("\n⚙️  Configuring virtual hosts...");
    let changes = vhosts::execute(ctx, config)?;
    for change in &changes {
        println!("{}", change);
    }

    println!("\n🔄 Restarting Apache...");
    ctx.service().restart(&ctx.layout().restart_command)?;
    println!("✅ Apache restarted successfully");

    Ok(ConfigureOutcome { changes })
}

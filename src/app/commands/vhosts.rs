//! Writing virtual-host files into the vhosts directory.

use std::fmt;
use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::vhost::{render_http, render_https};
use crate::domain::{AppError, Configuration, PREDEFINED_VHOSTS, VhostKind};
use crate::ports::{PrivilegeCheck, ServerFilesystem, ServiceControl};

/// One observable effect of the write step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VhostChange {
    /// A custom vhost file was rendered and written.
    Created { kind: VhostKind, path: PathBuf },
    /// A shipped sample was copied onto its enabled name.
    Enabled { target: String },
    /// A sample could not be enabled; the run continues.
    Skipped { warning: String },
}

impl VhostChange {
    pub fn is_warning(&self) -> bool {
        matches!(self, VhostChange::Skipped { .. })
    }
}

impl fmt::Display for VhostChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VhostChange::Created { kind, path } => {
                write!(f, "✅ Created {} virtual host: {}", kind, path.display())
            }
            VhostChange::Enabled { target } => write!(f, "✅ Enabled {}", target),
            VhostChange::Skipped { warning } => write!(f, "⚠️  {}", warning),
        }
    }
}

/// Write vhosts in the mode the configuration asks for.
pub fn execute<P, F, S>(
    ctx: &AppContext<P, F, S>,
    config: &Configuration,
) -> Result<Vec<VhostChange>, AppError>
where
    P: PrivilegeCheck,
    F: ServerFilesystem,
    S: ServiceControl,
{
    if config.use_predefined() {
        Ok(enable_predefined(ctx))
    } else {
        write_custom(ctx, config)
    }
}

/// Copy each shipped `*.conf.disabled` sample onto its enabled name.
///
/// Missing sources and failed copies are reported as warnings, never errors.
fn enable_predefined<P, F, S>(ctx: &AppContext<P, F, S>) -> Vec<VhostChange>
where
    P: PrivilegeCheck,
    F: ServerFilesystem,
    S: ServiceControl,
{
    let vhosts_dir = &ctx.layout().vhosts_dir;
    let fs = ctx.filesystem();

    PREDEFINED_VHOSTS
        .iter()
        .map(|vhost| {
            let source = vhosts_dir.join(vhost.source);
            let target = vhosts_dir.join(vhost.target);

            if !fs.path_exists(&source) {
                log::debug!("predefined sample missing: {}", source.display());
                return VhostChange::Skipped {
                    warning: format!("Predefined file not found: {}", vhost.source),
                };
            }

            match fs.copy_file(&source, &target) {
                Ok(()) => VhostChange::Enabled { target: vhost.target.to_string() },
                Err(err) => VhostChange::Skipped {
                    warning: format!("Could not enable {}: {}", vhost.target, err),
                },
            }
        })
        .collect()
}

/// Render and write `<app>-http-vhost.conf`, plus the HTTPS file when requested.
fn write_custom<P, F, S>(
    ctx: &AppContext<P, F, S>,
    config: &Configuration,
) -> Result<Vec<VhostChange>, AppError>
where
    P: PrivilegeCheck,
    F: ServerFilesystem,
    S: ServiceControl,
{
    let layout = ctx.layout();
    let mut changes = Vec::new();

    let http = render_http(config.project_path(), config.port())?;
    let http_path = VhostKind::Http.file_path(&layout.vhosts_dir, config.app_name());
    ctx.filesystem().write_file(&http_path, &http)?;
    changes.push(VhostChange::Created { kind: VhostKind::Http, path: http_path });

    if config.use_https() {
        let https = render_https(
            config.project_path(),
            config.port(),
            &layout.cert_file,
            &layout.cert_key_file,
        )?;
        let https_path = VhostKind::Https.file_path(&layout.vhosts_dir, config.app_name());
        ctx.filesystem().write_file(&https_path, &https)?;
        changes.push(VhostChange::Created { kind: VhostKind::Https, path: https_path });
    }

    Ok(changes)
}

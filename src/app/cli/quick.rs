//! Quick (flag-driven) command implementation.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::app::api::{self, RawConfiguration};
use crate::app::commands::collect::DEFAULT_APP_NAME;
use crate::domain::AppError;

#[derive(Args, Debug)]
pub struct QuickArgs {
    /// Project path
    #[arg(short = 'p', long, value_name = "PATH")]
    path: Option<PathBuf>,
    /// Application port
    #[arg(short = 'P', long, value_name = "PORT", default_value = "3000")]
    port: String,
    /// Application name
    #[arg(short = 'n', long, value_name = "NAME", default_value = DEFAULT_APP_NAME)]
    name: String,
    /// Disable HTTPS configuration
    #[arg(long = "no-https")]
    no_https: bool,
    /// Enable the shipped sample vhosts instead of generating custom ones
    #[arg(long)]
    predefined: bool,
}

impl From<QuickArgs> for RawConfiguration {
    fn from(args: QuickArgs) -> Self {
        RawConfiguration {
            project_path: args.path,
            port: args.port,
            app_name: args.name,
            use_https: !args.no_https,
            use_predefined: args.predefined,
        }
    }
}

pub fn run_quick(args: QuickArgs, config_path: Option<&Path>) -> Result<(), AppError> {
    let layout = api::load_layout(config_path)?;
    super::print_banner();

    let config = api::build_configuration(args.into())?;
    super::run_configuration(&config, layout)
}

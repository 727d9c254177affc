//! CLI Adapter.

mod interactive;
mod quick;

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser, Subcommand};

use crate::app::api;
use crate::app::config::CONFIG_ENV_VAR;
use crate::app::commands::summary;
use crate::domain::{AppError, Configuration, InstallLayout};

#[derive(Parser)]
#[command(name = "apache-node-proxy")]
#[command(version)]
#[command(about = "Configure Apache virtual hosts for Node.js applications", long_about = None)]
struct Cli {
    /// TOML file overriding the Bitnami install layout
    #[arg(long, global = true, value_name = "FILE", env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,
    /// Increase diagnostic output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Quick setup with default values
    #[clap(visible_alias = "q")]
    Quick(quick::QuickArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };
    init_logging(cli.verbose);

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        None => interactive::run_interactive(config_path),
        Some(Commands::Quick(args)) => quick::run_quick(args, config_path),
    };

    if let Err(e) = result {
        log::debug!("run failed: {:?}", e);
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(verbose > 1)
        .init();
}

fn print_banner() {
    println!("🚀 Apache Node.js Proxy");
    println!("Automatically configure Apache virtual hosts for your Node.js application\n");
}

fn run_configuration(config: &Configuration, layout: InstallLayout) -> Result<(), AppError> {
    let outcome = api::configure(config, layout)?;
    log::info!("applied {} vhost change(s)", outcome.changes.len());

    println!("\n✅ Configuration completed successfully!");
    print!("{}", summary::render(config));
    Ok(())
}

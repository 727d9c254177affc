//! Interactive (prompt-driven) command implementation.

use std::path::Path;

use dialoguer::{Confirm, Input};

use crate::app::api;
use crate::app::commands::collect::{self, DEFAULT_APP_NAME};
use crate::domain::{AppError, AppName, Configuration, ProxyPort};

pub fn run_interactive(config_path: Option<&Path>) -> Result<(), AppError> {
    let layout = api::load_layout(config_path)?;
    super::print_banner();

    let config = prompt_configuration()?;
    super::run_configuration(&config, layout)
}

fn prompt_error(what: &'static str) -> impl Fn(dialoguer::Error) -> AppError {
    move |err| AppError::Prompt { what: what.to_string(), details: err.to_string() }
}

/// Ask for each field, re-prompting until the answer validates.
fn prompt_configuration() -> Result<Configuration, AppError> {
    let cwd = std::env::current_dir()?;

    let search_root = cwd.clone();
    let project_path: String = Input::new()
        .with_prompt("Enter your Node.js project path")
        .default(cwd.display().to_string())
        .validate_with(move |input: &String| -> Result<(), String> {
            collect::resolve_project_path(Path::new(input), &search_root)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(prompt_error("project path"))?;

    let port: String = Input::new()
        .with_prompt("Enter the port your Node.js application runs on")
        .default(ProxyPort::DEFAULT.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            ProxyPort::parse(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(prompt_error("port"))?;

    let app_name: String = Input::new()
        .with_prompt("Enter a name for your application (used for config files)")
        .default(DEFAULT_APP_NAME.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            AppName::new(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(prompt_error("application name"))?;

    let use_predefined = Confirm::new()
        .with_prompt("Do you want to use predefined virtual hosts (if available)?")
        .default(true)
        .interact()
        .map_err(prompt_error("virtual host mode"))?;

    let use_https = Confirm::new()
        .with_prompt("Do you want to configure HTTPS virtual host?")
        .default(true)
        .interact()
        .map_err(prompt_error("HTTPS choice"))?;

    let raw = api::RawConfiguration {
        project_path: Some(project_path.into()),
        port,
        app_name,
        use_https,
        use_predefined,
    };
    api::build_configuration_in(raw, &cwd)
}

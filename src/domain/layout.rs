//! Filesystem locations and commands of the Apache installation.

use std::path::PathBuf;

use serde::Deserialize;

use super::AppError;

pub const DEFAULT_BASE_DIR: &str = "/opt/bitnami";
pub const DEFAULT_CONF_DIR: &str = "/opt/bitnami/apache/conf";
pub const DEFAULT_VHOSTS_DIR: &str = "/opt/bitnami/apache/conf/vhosts";
pub const DEFAULT_CERT_FILE: &str = "/opt/bitnami/apache/conf/bitnami/certs/server.crt";
pub const DEFAULT_CERT_KEY_FILE: &str = "/opt/bitnami/apache/conf/bitnami/certs/server.key";
pub const DEFAULT_RESTART_COMMAND: [&str; 3] = ["/opt/bitnami/ctlscript.sh", "restart", "apache"];

/// Where the tool looks for Apache and how it restarts it.
///
/// Every field defaults to the stock Bitnami layout. A TOML override file may
/// replace any subset of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallLayout {
    pub base_dir: PathBuf,
    pub conf_dir: PathBuf,
    pub vhosts_dir: PathBuf,
    pub cert_file: PathBuf,
    pub cert_key_file: PathBuf,
    pub restart_command: Vec<String>,
}

impl Default for InstallLayout {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            conf_dir: PathBuf::from(DEFAULT_CONF_DIR),
            vhosts_dir: PathBuf::from(DEFAULT_VHOSTS_DIR),
            cert_file: PathBuf::from(DEFAULT_CERT_FILE),
            cert_key_file: PathBuf::from(DEFAULT_CERT_KEY_FILE),
            restart_command: DEFAULT_RESTART_COMMAND.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl InstallLayout {
    pub fn validate(&self) -> Result<(), AppError> {
        match self.restart_command.first() {
            Some(program) if !program.trim().is_empty() => Ok(()),
            _ => Err(AppError::config_error("restart_command must name a program to run")),
        }
    }
}

/// Parse a layout override from TOML content.
pub fn parse_layout_content(content: &str) -> Result<InstallLayout, toml::de::Error> {
    toml::from_str(content)
}

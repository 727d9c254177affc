//! Install layout loading.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, InstallLayout, parse_layout_content};

/// Environment variable naming a layout override file.
pub const CONFIG_ENV_VAR: &str = "APACHE_NODE_PROXY_CONFIG";

/// Load the install layout, applying the override file at `path` if given.
pub fn load_layout(path: Option<&Path>) -> Result<InstallLayout, AppError> {
    let Some(path) = path else {
        return Ok(InstallLayout::default());
    };

    log::debug!("loading layout override from {}", path.display());
    let content = fs::read_to_string(path)
        .map_err(|source| AppError::ConfigRead { path: path.to_path_buf(), source })?;
    let layout = parse_layout_content(&content)
        .map_err(|e| AppError::ConfigParse { path: path.to_path_buf(), details: e.to_string() })?;
    layout.validate()?;
    Ok(layout)
}

//! Turning raw answers or flags into a validated `Configuration`.

use std::path::{Component, Path, PathBuf};

use crate::domain::{AppError, AppName, Configuration, ProxyPort};

pub const DEFAULT_APP_NAME: &str = "myapp";

/// Raw field values, as typed at the prompts or passed as `quick` flags.
#[derive(Debug, Clone)]
pub struct RawConfiguration {
    pub project_path: Option<PathBuf>,
    pub port: String,
    pub app_name: String,
    pub use_https: bool,
    pub use_predefined: bool,
}

impl Default for RawConfiguration {
    fn default() -> Self {
        Self {
            project_path: None,
            port: ProxyPort::DEFAULT.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
            use_https: true,
            use_predefined: false,
        }
    }
}

/// Resolve `input` against `cwd` and require that it exists.
pub fn resolve_project_path(input: &Path, cwd: &Path) -> Result<PathBuf, AppError> {
    let resolved = normalize(&cwd.join(input));
    if !resolved.exists() {
        return Err(AppError::InvalidProjectPath(input.display().to_string()));
    }
    Ok(resolved)
}

/// Lexically remove `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Validate every field; the first invalid one aborts.
pub fn build(raw: RawConfiguration, cwd: &Path) -> Result<Configuration, AppError> {
    let project_path = match raw.project_path {
        Some(path) => resolve_project_path(&path, cwd)?,
        None => resolve_project_path(Path::new("."), cwd)?,
    };
    let port = ProxyPort::parse(&raw.port)?;
    let app_name = AppName::new(&raw.app_name)?;

    Ok(Configuration::new(project_path, port, app_name, raw.use_https, raw.use_predefined))
}

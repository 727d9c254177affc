use std::path::{Path, PathBuf};

use super::{AppName, ProxyPort};

/// Parameters for one configuration run.
///
/// Built once from prompt answers or command-line flags and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    project_path: PathBuf,
    port: ProxyPort,
    app_name: AppName,
    use_https: bool,
    use_predefined: bool,
}

impl Configuration {
    pub fn new(
        project_path: PathBuf,
        port: ProxyPort,
        app_name: AppName,
        use_https: bool,
        use_predefined: bool,
    ) -> Self {
        Self { project_path, port, app_name, use_https, use_predefined }
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    pub fn port(&self) -> ProxyPort {
        self.port
    }

    pub fn app_name(&self) -> &AppName {
        &self.app_name
    }

    pub fn use_https(&self) -> bool {
        self.use_https
    }

    pub fn use_predefined(&self) -> bool {
        self.use_predefined
    }

    /// Label used in the run summary.
    pub fn mode_label(&self) -> &'static str {
        if self.use_predefined { "Predefined" } else { "Custom" }
    }
}

//! Virtual-host files: naming, shipped samples, and rendering.

mod template;

use std::fmt;
use std::path::{Path, PathBuf};

pub use template::{render_http, render_https};

use super::AppName;

/// Protocol flavour of a generated virtual host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VhostKind {
    Http,
    Https,
}

impl VhostKind {
    pub fn label(self) -> &'static str {
        match self {
            VhostKind::Http => "HTTP",
            VhostKind::Https => "HTTPS",
        }
    }

    fn file_suffix(self) -> &'static str {
        match self {
            VhostKind::Http => "http-vhost.conf",
            VhostKind::Https => "https-vhost.conf",
        }
    }

    /// `<vhosts_dir>/<appName>-http-vhost.conf` or the HTTPS counterpart.
    pub fn file_path(self, vhosts_dir: &Path, app_name: &AppName) -> PathBuf {
        vhosts_dir.join(format!("{}-{}", app_name, self.file_suffix()))
    }
}

impl fmt::Display for VhostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A disabled sample shipped with the installation and the name it is enabled under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredefinedVhost {
    pub source: &'static str,
    pub target: &'static str,
}

pub const PREDEFINED_VHOSTS: [PredefinedVhost; 2] = [
    PredefinedVhost { source: "sample-vhost.conf.disabled", target: "sample-vhost.conf" },
    PredefinedVhost {
        source: "sample-https-vhost.conf.disabled",
        target: "sample-https-vhost.conf",
    },
];

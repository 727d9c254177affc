pub mod configuration;
pub mod error;
pub mod identifiers;
pub mod layout;
pub mod vhost;

pub use configuration::Configuration;
pub use error::AppError;
pub use identifiers::{AppName, ProxyPort};
pub use layout::{InstallLayout, parse_layout_content};
pub use vhost::{PREDEFINED_VHOSTS, PredefinedVhost, VhostKind};

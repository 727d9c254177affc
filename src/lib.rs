//! apache-node-proxy: configure Bitnami Apache virtual hosts that proxy to a Node.js app.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{
    ConfigureOutcome, RawConfiguration, VhostChange, build_configuration, build_configuration_in,
    configure, load_layout,
};
pub use domain::{AppError, AppName, Configuration, InstallLayout, ProxyPort, VhostKind};

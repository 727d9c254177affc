pub mod app_name;
pub mod proxy_port;
pub mod validation;

pub use app_name::AppName;
pub use proxy_port::ProxyPort;

mod privilege_check;
mod server_filesystem;
mod service_control;

pub use privilege_check::PrivilegeCheck;
pub use server_filesystem::ServerFilesystem;
pub use service_control::ServiceControl;

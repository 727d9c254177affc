mod fake_privileges;
mod fake_service_control;
mod memory_filesystem;

pub use fake_privileges::FakePrivileges;
pub use fake_service_control::FakeServiceControl;
pub use memory_filesystem::MemoryFilesystem;

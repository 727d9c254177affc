pub mod effective_uid;
pub mod local_filesystem;
pub mod restart_command;

pub use effective_uid::EffectiveUidCheck;
pub use local_filesystem::LocalFilesystem;
pub use restart_command::RestartCommandAdapter;

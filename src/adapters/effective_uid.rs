use crate::ports::PrivilegeCheck;

/// Treats an effective uid of 0 as elevated.
#[derive(Debug, Clone, Copy, Default)]
pub struct EffectiveUidCheck;

impl EffectiveUidCheck {
    pub fn new() -> Self {
        Self
    }
}

impl PrivilegeCheck for EffectiveUidCheck {
    fn is_elevated(&self) -> bool {
        let euid = nix::unistd::geteuid();
        log::debug!("effective uid is {}", euid);
        euid.is_root()
    }
}

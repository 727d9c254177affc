use crate::ports::PrivilegeCheck;

/// Privilege check with a fixed answer.
#[derive(Debug, Clone, Copy)]
pub struct FakePrivileges {
    elevated: bool,
}

impl FakePrivileges {
    pub fn root() -> Self {
        Self { elevated: true }
    }

    pub fn unprivileged() -> Self {
        Self { elevated: false }
    }
}

impl PrivilegeCheck for FakePrivileges {
    fn is_elevated(&self) -> bool {
        self.elevated
    }
}

/// Port for inspecting the privileges of the running process.
pub trait PrivilegeCheck {
    /// Whether the process may modify system configuration (root).
    fn is_elevated(&self) -> bool;
}

use crate::domain::InstallLayout;
use crate::ports::{PrivilegeCheck, ServerFilesystem, ServiceControl};

/// Application context holding dependencies for command execution.
pub struct AppContext<P: PrivilegeCheck, F: ServerFilesystem, S: ServiceControl> {
    layout: InstallLayout,
    privileges: P,
    filesystem: F,
    service: S,
}

impl<P: PrivilegeCheck, F: ServerFilesystem, S: ServiceControl> AppContext<P, F, S> {
    /// Create a new application context.
    pub fn new(layout: InstallLayout, privileges: P, filesystem: F, service: S) -> Self {
        Self { layout, privileges, filesystem, service }
    }

    /// Get the install layout the run works against.
    pub fn layout(&self) -> &InstallLayout {
        &self.layout
    }

    /// Get a reference to the privilege check.
    pub fn privileges(&self) -> &P {
        &self.privileges
    }

    /// Get a reference to the server filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the service controller.
    pub fn service(&self) -> &S {
        &self.service
    }
}

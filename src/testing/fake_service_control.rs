use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::ServiceControl;

/// Records restart invocations instead of running them.
#[derive(Debug, Default)]
pub struct FakeServiceControl {
    pub invocations: RefCell<Vec<Vec<String>>>,
    fail: bool,
}

#[allow(dead_code)]
impl FakeServiceControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn restart_count(&self) -> usize {
        self.invocations.borrow().len()
    }
}

impl ServiceControl for FakeServiceControl {
    fn restart(&self, command: &[String]) -> Result<(), AppError> {
        self.invocations.borrow_mut().push(command.to_vec());
        if self.fail {
            return Err(AppError::RestartFailed { command: command.join(" ") });
        }
        Ok(())
    }
}

use std::fmt;
use std::num::NonZeroU16;

use crate::domain::AppError;

/// TCP port the proxied Node.js application listens on (1..=65535).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProxyPort(NonZeroU16);

impl ProxyPort {
    pub const DEFAULT: u16 = 3000;

    /// Validate a numeric port.
    pub fn new(port: u32) -> Result<Self, AppError> {
        u16::try_from(port)
            .ok()
            .and_then(NonZeroU16::new)
            .map(Self)
            .ok_or_else(|| AppError::InvalidPort(port.to_string()))
    }

    /// Parse a port from user input, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let trimmed = input.trim();
        let port: u32 =
            trimmed.parse().map_err(|_| AppError::InvalidPort(trimmed.to_string()))?;
        Self::new(port)
    }

    pub fn get(self) -> u16 {
        self.0.get()
    }
}

impl Default for ProxyPort {
    fn default() -> Self {
        Self(NonZeroU16::new(Self::DEFAULT).unwrap_or(NonZeroU16::MIN))
    }
}

impl fmt::Display for ProxyPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

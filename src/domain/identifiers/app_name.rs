use super::validation::validate_app_name;
use crate::domain::AppError;
use crate::impl_validated_id;

/// A validated application name.
///
/// Guarantees:
/// - Non-empty
/// - Contains only ASCII letters, digits, `-`, or `_`
///
/// The name becomes the prefix of the generated vhost file names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(String);

impl_validated_id!(AppName, validate_app_name, AppError::InvalidAppName);

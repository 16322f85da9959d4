// Domain types and their construction rules

pub mod service_type;
pub mod supplier;
pub mod user;

pub use service_type::ServiceType;
pub use supplier::{Severity, Supplier};
pub use user::{Role, User};

use thiserror::Error;

/// Validation failures raised while constructing domain values.
/// Every variant maps to a 400 response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Invalid severity level. Allowed values: low, medium, high, highest")]
    InvalidSeverity,

    #[error("Invalid role. Allowed roles are: operational, admin")]
    InvalidRole,

    #[error("{0} cannot be empty")]
    Empty(&'static str),
}

impl From<DomainError> for crate::errors::AppError {
    fn from(err: DomainError) -> Self {
        crate::errors::AppError::Validation(err.to_string())
    }
}

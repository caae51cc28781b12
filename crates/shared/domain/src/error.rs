use std::borrow::Cow;
use thiserror::Error;

/// A specialized [`DomainError`] enum of this crate.
///
/// The domain is deliberately permissive: enrolling a duplicate code,
/// unenrolling an absent one, and re-setting a status are all no-ops. The
/// only failures are the construction-time invariants below.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A constructor or builder argument violated a domain invariant
    /// (empty registration number, empty course code).
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: Cow<'static, str> },
}

impl DomainError {
    pub(crate) fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidArgument { message: message.into() }
    }
}

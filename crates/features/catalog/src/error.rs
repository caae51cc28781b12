use std::borrow::Cow;
use thiserror::Error;

/// A specialized [`CatalogError`] enum of this crate.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A course with the same code is already registered.
    #[error("Duplicate course code: {code}")]
    DuplicateCourse { code: Cow<'static, str> },

    /// A student with the same registration number is already registered.
    #[error("Duplicate registration number: {reg_no}")]
    DuplicateStudent { reg_no: Cow<'static, str> },

    /// The referenced course code is not in the catalog.
    #[error("Course not found: {code}")]
    CourseNotFound { code: Cow<'static, str> },

    /// The referenced registration number is not in the catalog.
    #[error("Student not found: {reg_no}")]
    StudentNotFound { reg_no: Cow<'static, str> },
}

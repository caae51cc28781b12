//! # Domain Models
//!
//! Pure domain types for the campus course records model: the [`Person`]
//! identity fields and [`Profile`] capability, immutable [`Course`] entries
//! created through [`CourseBuilder`], and mutable [`Student`] records with
//! their enrollment rules.
//!
//! Keep it lean: no I/O or registry logic—just entities and their invariants.
//! Cross-entity checks (key uniqueness, course existence) belong to the
//! catalog collaborator, not to the entities themselves.

mod course;
mod error;
mod person;
mod student;

pub use course::{Course, CourseBuilder, Semester};
pub use error::DomainError;
pub use person::{Person, Profile};
pub use student::{Student, StudentStatus};

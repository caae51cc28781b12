use crate::error::DomainError;
use crate::person::{Person, Profile};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use strum_macros::Display;

/// Lifecycle flag for a student record.
///
/// A plain two-state toggle, not a guarded state machine: transitions are
/// unconditional and may cycle `Active` ↔ `Deactivated` freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum StudentStatus {
    #[default]
    Active,
    Deactivated,
}

/// A mutable student record keyed by registration number.
///
/// Enrollment is an ordered, duplicate-free list of course codes. The codes
/// are weak references: the student never verifies that a code exists in any
/// catalog, that check belongs to the catalog collaborator.
///
/// Identity is the `reg_no` alone: [`PartialEq`] and [`Hash`] ignore every
/// other attribute, mutable or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    #[serde(flatten)]
    person: Person,
    reg_no: String,
    status: StudentStatus,
    enrolled: Vec<String>,
}

impl Student {
    /// Creates an active student with an empty enrollment list.
    ///
    /// Name and email pass through unvalidated; the registration date is
    /// stamped with the current date (see [`Person::registered`]).
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidArgument`] if `reg_no` is empty. No
    /// partially-constructed record is observable on failure.
    pub fn new(
        reg_no: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let reg_no = reg_no.into();
        if reg_no.is_empty() {
            return Err(DomainError::invalid("Registration number cannot be empty"));
        }

        Ok(Self {
            person: Person::new(full_name, email),
            reg_no,
            status: StudentStatus::default(),
            enrolled: Vec::new(),
        })
    }

    #[must_use]
    pub fn reg_no(&self) -> &str {
        &self.reg_no
    }

    #[must_use]
    pub const fn status(&self) -> StudentStatus {
        self.status
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        self.person.full_name()
    }

    #[must_use]
    pub fn email(&self) -> &str {
        self.person.email()
    }

    #[must_use]
    pub const fn registered(&self) -> chrono::NaiveDate {
        self.person.registered()
    }

    /// Currently enrolled course codes, in first-insertion order.
    #[must_use]
    pub fn enrolled_courses(&self) -> &[String] {
        &self.enrolled
    }

    /// Appends `code` to the enrollment list.
    ///
    /// Idempotent: a code already present is left untouched, preserving
    /// first-insertion order. The code is not checked against any catalog.
    pub fn enroll_course(&mut self, code: impl Into<String>) {
        let code = code.into();
        if !self.enrolled.contains(&code) {
            self.enrolled.push(code);
        }
    }

    /// Removes `code` from the enrollment list; an absent code is a no-op.
    pub fn unenroll_course(&mut self, code: &str) {
        self.enrolled.retain(|enrolled| enrolled != code);
    }

    /// Switches the lifecycle flag unconditionally.
    pub const fn set_status(&mut self, status: StudentStatus) {
        self.status = status;
    }
}

impl Profile for Student {
    fn profile_info(&self) -> String {
        format!(
            "Student[RegNo={}, Name={}, Email={}, Status={}]",
            self.reg_no,
            self.person.full_name(),
            self.person.email(),
            self.status
        )
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.profile_info())
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.reg_no == other.reg_no
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.reg_no.hash(state);
    }
}

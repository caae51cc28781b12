use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Common identity fields shared by every person-like entity.
///
/// Fields are fixed once the record is created; concrete entities embed a
/// `Person` and supply their own unique key on top of it. The registration
/// date is stamped at construction time: it records when the record was
/// created, not a caller-supplied historical date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    full_name: String,
    email: String,
    registered: NaiveDate,
}

impl Person {
    /// Creates a person record stamped with the current local date.
    pub(crate) fn new(full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            registered: chrono::Local::now().date_naive(),
        }
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub const fn registered(&self) -> NaiveDate {
        self.registered
    }
}

/// Capability for entities that can describe themselves for display.
///
/// Reporting collaborators consume the summary string; nothing in the domain
/// parses it back.
pub trait Profile {
    /// A deterministic one-line summary of the entity.
    fn profile_info(&self) -> String;
}

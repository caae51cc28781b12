use crate::error::DomainError;
use private::Sealed;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use strum_macros::Display;

/// Academic term a course offering is scheduled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Semester {
    Spring,
    Summer,
    Fall,
    Winter,
}

/// An immutable catalog entry for a course offering.
///
/// Instances are created exclusively through [`Course::builder`]; once built
/// no field can change. Representing a changed offering means building a new
/// instance under the same or a different code.
///
/// Identity is the course `code` alone: [`PartialEq`] and [`Hash`] ignore
/// every other attribute, so registries can key on the business identifier
/// while treating attribute differences as "the same entry".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    code: String,
    title: String,
    credits: u32,
    instructor: String,
    semester: Option<Semester>,
    department: String,
}

impl Course {
    /// Starts a builder. The course code must be supplied before `build`
    /// becomes callable.
    #[must_use]
    pub fn builder() -> CourseBuilder {
        CourseBuilder::new()
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn credits(&self) -> u32 {
        self.credits
    }

    #[must_use]
    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    /// The scheduled semester, when one was set at build time.
    #[must_use]
    pub const fn semester(&self) -> Option<Semester> {
        self.semester
    }

    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Course {}

impl Hash for Course {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({} credits), Instructor: {}, Semester: ",
            self.code, self.title, self.credits, self.instructor
        )?;
        match self.semester {
            Some(semester) => write!(f, "{semester}")?,
            None => f.write_str("unscheduled")?,
        }
        write!(f, ", Department: {}", self.department)
    }
}

#[derive(Debug, Default)]
pub struct NoCode;
#[derive(Debug)]
pub struct WithCode(String);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoCode {}
impl Sealed for WithCode {}

#[derive(Debug, Clone, Default)]
struct CourseConfig {
    title: String,
    credits: u32,
    instructor: String,
    semester: Option<Semester>,
    department: String,
}

/// Fluent builder producing exactly one immutable [`Course`].
///
/// Setters perform no validation and may be chained in any order; `build`
/// snapshots whatever was supplied at the moment of the call. Fields left
/// unset keep their defaults (zero credits, empty strings, no semester).
/// The builder is consumed by `build`, so a near-identical variant course
/// requires a fresh builder.
#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct CourseBuilder<S: Sealed = NoCode> {
    state: S,
    config: CourseConfig,
}

#[allow(private_bounds)]
impl<S: Sealed> CourseBuilder<S> {
    #[must_use = "Sets the course title"]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    #[must_use = "Sets the credit value of the course"]
    pub const fn credits(mut self, credits: u32) -> Self {
        self.config.credits = credits;
        self
    }

    #[must_use = "Sets the course instructor"]
    pub fn instructor(mut self, instructor: impl Into<String>) -> Self {
        self.config.instructor = instructor.into();
        self
    }

    #[must_use = "Schedules the course in a semester"]
    pub const fn semester(mut self, semester: Semester) -> Self {
        self.config.semester = Some(semester);
        self
    }

    #[must_use = "Sets the department offering the course"]
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.config.department = department.into();
        self
    }

    fn transition<N: Sealed>(self, state: N) -> CourseBuilder<N> {
        CourseBuilder { state, config: self.config }
    }
}

impl CourseBuilder<NoCode> {
    /// Creates a new empty builder.
    #[must_use = "Builder must be given a code with `code` before use"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unique course code, unlocking `build`.
    #[must_use = "Sets the unique course code"]
    pub fn code(self, code: impl Into<String>) -> CourseBuilder<WithCode> {
        self.transition(WithCode(code.into()))
    }
}

impl CourseBuilder<WithCode> {
    /// Snapshots the builder into an immutable [`Course`].
    ///
    /// Uniqueness of the code across a catalog is not checked here; that is
    /// the registry's responsibility on insert.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidArgument`] if the supplied code is empty.
    pub fn build(self) -> Result<Course, DomainError> {
        if self.state.0.is_empty() {
            return Err(DomainError::invalid("Course code cannot be empty"));
        }

        Ok(Course {
            code: self.state.0,
            title: self.config.title,
            credits: self.config.credits,
            instructor: self.config.instructor,
            semester: self.config.semester,
            department: self.config.department,
        })
    }
}

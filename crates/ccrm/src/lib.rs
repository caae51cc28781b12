//! Facade crate for the campus course records model.
//! Re-exports the domain entities and their collaborators (catalog, settings).
//! Keep this crate thin: it should compose other crates, not implement
//! business logic.
//!
//! ## Usage
//!
//! ```rust
//! use ccrm::{Catalog, Course, Semester, Student};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut catalog = Catalog::new();
//!
//! catalog.add_course(
//!     Course::builder()
//!         .code("CS101")
//!         .title("Data Structures")
//!         .credits(4)
//!         .semester(Semester::Fall)
//!         .build()?,
//! )?;
//! catalog.add_student(Student::new("S001", "Jane Doe", "jane@x.edu")?)?;
//!
//! catalog.enroll("S001", "CS101")?;
//! assert_eq!(catalog.student("S001").unwrap().enrolled_courses(), ["CS101"]);
//! # Ok(())
//! # }
//! ```

pub use ccrm_catalog as catalog;
pub use ccrm_domain as domain;
pub use ccrm_settings as settings;

pub use ccrm_catalog::{Catalog, CatalogError};
pub use ccrm_domain::{
    Course, CourseBuilder, DomainError, Person, Profile, Semester, Student, StudentStatus,
};
pub use ccrm_settings::{Settings, SettingsError};

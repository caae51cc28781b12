//! Catalog feature slice.
//!
//! An insertion-ordered registry of [`Course`] and [`Student`] entities keyed
//! by their business identifiers (course code / registration number). The
//! catalog owns the cross-entity checks the entities deliberately skip: key
//! uniqueness on insert and existence checks for enrollment. The entities
//! never self-register.

mod error;

pub use error::CatalogError;

use ccrm_domain::{Course, Student};
use fxhash::FxHashMap;
use tracing::debug;

/// Registry of courses and students keyed by their unique identifiers.
///
/// Lookups go through hash maps; iteration follows insertion order, tracked
/// separately per entity kind. Mutating a stored student (enrollment, status)
/// goes through [`Catalog::student_mut`] or the checked
/// [`Catalog::enroll`]/[`Catalog::unenroll`] operations.
#[derive(Debug, Default)]
pub struct Catalog {
    courses: FxHashMap<String, Course>,
    course_order: Vec<String>,
    students: FxHashMap<String, Student>,
    student_order: Vec<String>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a course under its code.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateCourse`] if the code is already
    /// registered; the catalog is left unchanged.
    pub fn add_course(&mut self, course: Course) -> Result<(), CatalogError> {
        if self.courses.contains_key(course.code()) {
            return Err(CatalogError::DuplicateCourse { code: course.code().to_owned().into() });
        }

        debug!(code = course.code(), "Course registered");
        self.course_order.push(course.code().to_owned());
        self.courses.insert(course.code().to_owned(), course);
        Ok(())
    }

    /// Registers a student under their registration number.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateStudent`] if the registration number
    /// is already registered; the catalog is left unchanged.
    pub fn add_student(&mut self, student: Student) -> Result<(), CatalogError> {
        if self.students.contains_key(student.reg_no()) {
            return Err(CatalogError::DuplicateStudent {
                reg_no: student.reg_no().to_owned().into(),
            });
        }

        debug!(reg_no = student.reg_no(), "Student registered");
        self.student_order.push(student.reg_no().to_owned());
        self.students.insert(student.reg_no().to_owned(), student);
        Ok(())
    }

    #[must_use]
    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    #[must_use]
    pub fn student(&self, reg_no: &str) -> Option<&Student> {
        self.students.get(reg_no)
    }

    /// Mutable access to a stored student, for status and enrollment changes
    /// outside the checked [`Catalog::enroll`]/[`Catalog::unenroll`] paths.
    #[must_use]
    pub fn student_mut(&mut self, reg_no: &str) -> Option<&mut Student> {
        self.students.get_mut(reg_no)
    }

    /// Removes and returns the course with `code`, if registered.
    ///
    /// Students enrolled under the code keep their weak reference; dangling
    /// codes are the caller's concern, exactly as for never-registered ones.
    pub fn remove_course(&mut self, code: &str) -> Option<Course> {
        let removed = self.courses.remove(code);
        if removed.is_some() {
            self.course_order.retain(|key| key != code);
            debug!(code, "Course removed");
        }
        removed
    }

    /// Removes and returns the student with `reg_no`, if registered.
    pub fn remove_student(&mut self, reg_no: &str) -> Option<Student> {
        let removed = self.students.remove(reg_no);
        if removed.is_some() {
            self.student_order.retain(|key| key != reg_no);
            debug!(reg_no, "Student removed");
        }
        removed
    }

    /// Registered courses in insertion order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.course_order.iter().filter_map(|key| self.courses.get(key))
    }

    /// Registered students in insertion order.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.student_order.iter().filter_map(|key| self.students.get(key))
    }

    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Enrolls a registered student in a registered course.
    ///
    /// This is the existence check the entities themselves skip; the
    /// enrollment itself is the idempotent domain operation, so enrolling an
    /// already-enrolled student succeeds without effect.
    ///
    /// # Errors
    /// Returns [`CatalogError::CourseNotFound`] or
    /// [`CatalogError::StudentNotFound`] when either side is missing.
    pub fn enroll(&mut self, reg_no: &str, code: &str) -> Result<(), CatalogError> {
        if !self.courses.contains_key(code) {
            return Err(CatalogError::CourseNotFound { code: code.to_owned().into() });
        }
        let student = self
            .students
            .get_mut(reg_no)
            .ok_or_else(|| CatalogError::StudentNotFound { reg_no: reg_no.to_owned().into() })?;

        student.enroll_course(code);
        debug!(reg_no, code, "Student enrolled");
        Ok(())
    }

    /// Removes `code` from a registered student's enrollment.
    ///
    /// The student must be registered; the code itself follows the domain's
    /// permissive rule, so unenrolling a code the student never had (or one
    /// no longer in the catalog) is a no-op.
    ///
    /// # Errors
    /// Returns [`CatalogError::StudentNotFound`] when the student is missing.
    pub fn unenroll(&mut self, reg_no: &str, code: &str) -> Result<(), CatalogError> {
        let student = self
            .students
            .get_mut(reg_no)
            .ok_or_else(|| CatalogError::StudentNotFound { reg_no: reg_no.to_owned().into() })?;

        student.unenroll_course(code);
        debug!(reg_no, code, "Student unenrolled");
        Ok(())
    }
}

//! The record store for matricula.
//!
//! Holds the ordered in-memory collection of student records plus the
//! identifier counter, and applies the configured record defaults.

use chrono::Local;
use tracing::debug;

use crate::config::RecordsConfig;
use crate::error::{Error, Result};
use crate::student::{NewStudent, Student};

/// The in-memory record store.
///
/// Records keep insertion order. Identifiers are assigned sequentially
/// starting at 1 and are never reused, even after removal.
#[derive(Debug, Clone)]
pub struct Roster {
    /// Records in insertion order.
    students: Vec<Student>,
    /// The next identifier to assign. Only ever increases.
    next_id: u64,
    /// Defaults resolved from configuration.
    defaults: RecordsConfig,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(RecordsConfig::default())
    }
}

impl Roster {
    /// Create an empty roster applying the given record defaults.
    #[must_use]
    pub fn new(defaults: RecordsConfig) -> Self {
        Self {
            students: Vec::new(),
            next_id: 1,
            defaults,
        }
    }

    /// Enroll a new student.
    ///
    /// Assigns the next sequential identifier, stamps today's date, sets
    /// the initial status, and falls back to the default course when none
    /// was named. Empty names and emails are accepted as-is.
    pub fn add(&mut self, new: NewStudent) -> &Student {
        let id = self.next_id;
        self.next_id += 1;

        let course = new
            .course
            .unwrap_or_else(|| self.defaults.default_course.clone());

        let idx = self.students.len();
        self.students.push(Student {
            id,
            name: new.name,
            email: new.email,
            course,
            status: self.defaults.initial_status.clone(),
            enrolled_on: Local::now().date_naive(),
        });

        let added = &self.students[idx];
        debug!("enrolled student {} ({})", added.id, added.name);
        added
    }

    /// All records in insertion order.
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Check whether the roster has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Look up a record by identifier.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Change a student's status.
    ///
    /// `None` applies the configured graduated status. Only the status
    /// field is touched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StudentNotFound`] if no record carries `id`; the
    /// collection is left unchanged.
    pub fn set_status(&mut self, id: u64, status: Option<String>) -> Result<&Student> {
        let status = status.unwrap_or_else(|| self.defaults.graduated_status.clone());

        let Some(student) = self.students.iter_mut().find(|s| s.id == id) else {
            return Err(Error::not_found(id));
        };

        student.status = status;
        debug!("student {} status set to '{}'", id, student.status);
        Ok(student)
    }

    /// Remove a student record.
    ///
    /// Remaining records keep their order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StudentNotFound`] if no record carries `id`; the
    /// collection is left unchanged.
    pub fn remove(&mut self, id: u64) -> Result<Student> {
        let Some(idx) = self.students.iter().position(|s| s.id == id) else {
            return Err(Error::not_found(id));
        };

        let removed = self.students.remove(idx);
        debug!("removed student {} ({})", removed.id, removed.name);
        Ok(removed)
    }
}

//! Core record types for matricula.
//!
//! This module defines the fixed-shape student record and the parameters
//! collected when enrolling a new student.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status every record carries immediately after enrollment.
pub const STATUS_ACTIVE: &str = "Ativo";

/// Status applied by a status change when no explicit value is given.
pub const STATUS_GRADUATED: &str = "Formado";

/// Course assigned when enrollment does not name one.
pub const DEFAULT_COURSE: &str = "Teologia Geral";

/// A single student record.
///
/// Records are created by [`Roster::add`](crate::roster::Roster::add),
/// which assigns the identifier and stamps the enrollment date. After
/// creation only the status field is ever mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier, assigned sequentially starting at 1. Never reused.
    pub id: u64,

    /// Full name. Free text; not validated.
    pub name: String,

    /// Contact email. Free text; not validated.
    pub email: String,

    /// Enrolled course.
    pub course: String,

    /// Academic standing. Free text; [`STATUS_ACTIVE`] and
    /// [`STATUS_GRADUATED`] are the two well-known values.
    pub status: String,

    /// Calendar date the record was created. Immutable thereafter.
    pub enrolled_on: NaiveDate,
}

impl Student {
    /// Check whether the record carries the given status.
    #[must_use]
    pub fn has_status(&self, status: &str) -> bool {
        self.status == status
    }
}

/// Parameters collected when enrolling a new student.
///
/// The course is optional; `None` resolves to the roster's configured
/// default course at add time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewStudent {
    /// Full name.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// Course, if the operator named one.
    pub course: Option<String>,
}

impl NewStudent {
    /// Create enrollment parameters with no course named.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            course: None,
        }
    }

    /// Name the course to enroll in.
    #[must_use]
    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }
}

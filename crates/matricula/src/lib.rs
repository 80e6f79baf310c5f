//! `matricula` - an interactive register of student records
//!
//! This library provides the in-memory roster of student records and the
//! menu-driven shell that the `matri` binary runs over it. Records live
//! only as long as the session; there is no persistence.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod roster;
pub mod shell;
pub mod student;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use roster::Roster;
pub use shell::Shell;
pub use student::{NewStudent, Student};

//! Interactive menu shell for matricula.
//!
//! A single-threaded request/response loop: render the menu, read one
//! line, dispatch, repeat until exit. The shell is generic over its
//! reader and writer so whole sessions can be scripted in tests.

mod table;

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::roster::Roster;
use crate::student::NewStudent;

/// The five recognized menu choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Enroll a new student.
    Add,
    /// List all students.
    List,
    /// Change a student's status.
    SetStatus,
    /// Remove a student.
    Remove,
    /// End the session.
    Exit,
}

impl FromStr for MenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(Self::Add),
            "2" => Ok(Self::List),
            "3" => Ok(Self::SetStatus),
            "4" => Ok(Self::Remove),
            "5" => Ok(Self::Exit),
            other => Err(Error::invalid_selection(other)),
        }
    }
}

/// The interactive session.
///
/// Owns the roster for the lifetime of the session and drives it from
/// the supplied reader and writer. Operator mistakes (unknown id,
/// non-numeric id text, unrecognized menu choice) are reported and the
/// loop continues; only I/O failures end the session early.
pub struct Shell<R, W> {
    roster: Roster,
    input: R,
    output: W,
    date_format: String,
}

impl<R, W> fmt::Debug for Shell<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shell")
            .field("roster", &self.roster)
            .finish_non_exhaustive()
    }
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a session over the given roster and I/O endpoints.
    pub fn new(roster: Roster, input: R, output: W, config: &Config) -> Self {
        Self {
            roster,
            input,
            output,
            date_format: config.display.date_format.clone(),
        }
    }

    /// The roster as left by the session so far.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Run the menu loop until exit is chosen or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing the console fails.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.write_menu()?;
            let Some(line) = self.prompt("Select an option: ")? else {
                writeln!(self.output)?;
                break;
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(err) => {
                    self.report(&err)?;
                    continue;
                }
            };

            debug!("dispatching menu choice {:?}", choice);
            match choice {
                MenuChoice::Add => self.add_student()?,
                MenuChoice::List => self.list_students()?,
                MenuChoice::SetStatus => self.change_status()?,
                MenuChoice::Remove => self.remove_student()?,
                MenuChoice::Exit => {
                    writeln!(self.output, "\nClosing the student register. Goodbye!")?;
                    break;
                }
            }
        }
        Ok(())
    }

    fn write_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Student Register ---")?;
        writeln!(self.output, "1. Add a new student")?;
        writeln!(self.output, "2. List all students")?;
        writeln!(self.output, "3. Change a student's status")?;
        writeln!(self.output, "4. Remove a student")?;
        writeln!(self.output, "5. Exit")?;
        writeln!(self.output, "------------------------")?;
        Ok(())
    }

    /// Print `text`, then read one line. `None` means end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for an identifier. `None` means the operation was aborted,
    /// either by end of input or by unparseable text (already reported).
    fn prompt_id(&mut self, text: &str) -> Result<Option<u64>> {
        let Some(line) = self.prompt(text)? else {
            return Ok(None);
        };

        match line.parse::<u64>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                self.report(&Error::invalid_id(line))?;
                Ok(None)
            }
        }
    }

    fn report(&mut self, err: &Error) -> Result<()> {
        writeln!(self.output, "\nError: {err}.")?;
        Ok(())
    }

    fn add_student(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Student name: ")? else {
            return Ok(());
        };
        let Some(email) = self.prompt("Student email: ")? else {
            return Ok(());
        };
        let Some(course) = self.prompt("Course (empty for the default): ")? else {
            return Ok(());
        };

        let mut new = NewStudent::new(name, email);
        if !course.is_empty() {
            new = new.with_course(course);
        }

        let student = self.roster.add(new);
        writeln!(
            self.output,
            "\nStudent '{}' enrolled with id {}.",
            student.name, student.id
        )?;
        Ok(())
    }

    fn list_students(&mut self) -> Result<()> {
        if self.roster.is_empty() {
            writeln!(self.output, "\nNo students registered.")?;
            return Ok(());
        }

        writeln!(self.output)?;
        writeln!(self.output, "--- STUDENT LIST ---")?;
        table::render(&mut self.output, self.roster.students(), &self.date_format)
    }

    fn change_status(&mut self) -> Result<()> {
        self.list_students()?;
        let Some(id) = self.prompt_id("Id of the student to update: ")? else {
            return Ok(());
        };
        let Some(status) = self.prompt("New status (empty for the default): ")? else {
            return Ok(());
        };
        let status = if status.is_empty() {
            None
        } else {
            Some(status)
        };

        match self.roster.set_status(id, status) {
            Ok(student) => writeln!(
                self.output,
                "\nStatus of student {} set to '{}'.",
                student.id, student.status
            )?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn remove_student(&mut self) -> Result<()> {
        self.list_students()?;
        let Some(id) = self.prompt_id("Id of the student to remove: ")? else {
            return Ok(());
        };

        match self.roster.remove(id) {
            Ok(student) => writeln!(
                self.output,
                "\nStudent {} ({}) removed.",
                student.id, student.name
            )?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::init_test_logging;
    use crate::student::{DEFAULT_COURSE, STATUS_ACTIVE, STATUS_GRADUATED};
    use std::io::Cursor;

    type ScriptedShell = Shell<Cursor<Vec<u8>>, Vec<u8>>;

    fn run_session(script: &str) -> ScriptedShell {
        init_test_logging();
        let config = Config::default();
        let roster = Roster::new(config.records.clone());
        let mut shell = Shell::new(
            roster,
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            &config,
        );
        shell.run().expect("session failed");
        shell
    }

    fn output(shell: &ScriptedShell) -> String {
        String::from_utf8(shell.output.clone()).expect("output not utf-8")
    }

    #[test]
    fn test_menu_choice_from_str() {
        assert_eq!("1".parse::<MenuChoice>().unwrap(), MenuChoice::Add);
        assert_eq!("2".parse::<MenuChoice>().unwrap(), MenuChoice::List);
        assert_eq!("3".parse::<MenuChoice>().unwrap(), MenuChoice::SetStatus);
        assert_eq!("4".parse::<MenuChoice>().unwrap(), MenuChoice::Remove);
        assert_eq!("5".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
        assert_eq!(" 5 ".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn test_menu_choice_from_str_rejects_unknown() {
        for input in ["0", "6", "add", ""] {
            let err = input.parse::<MenuChoice>().unwrap_err();
            assert!(matches!(err, Error::InvalidSelection { .. }));
        }
    }

    #[test]
    fn test_exit_immediately() {
        let shell = run_session("5\n");
        assert!(shell.roster().is_empty());
        let out = output(&shell);
        assert!(out.contains("--- Student Register ---"));
        assert!(out.contains("Closing the student register"));
    }

    #[test]
    fn test_eof_ends_session() {
        let shell = run_session("");
        assert!(shell.roster().is_empty());
    }

    #[test]
    fn test_eof_mid_operation_ends_session() {
        // Input ends while the add prompts are being collected
        let shell = run_session("1\nAna\n");
        assert!(shell.roster().is_empty());
    }

    #[test]
    fn test_list_empty_roster() {
        let shell = run_session("2\n5\n");
        let out = output(&shell);
        assert!(out.contains("No students registered."));
        assert!(!out.contains("| ID |"));
    }

    #[test]
    fn test_add_with_default_course() {
        let shell = run_session("1\nAna\na@x.com\n\n2\n5\n");

        assert_eq!(shell.roster().len(), 1);
        let ana = shell.roster().get(1).unwrap();
        assert_eq!(ana.name, "Ana");
        assert_eq!(ana.email, "a@x.com");
        assert_eq!(ana.course, DEFAULT_COURSE);
        assert_eq!(ana.status, STATUS_ACTIVE);

        let out = output(&shell);
        assert!(out.contains("Student 'Ana' enrolled with id 1."));
        assert!(out.contains("--- STUDENT LIST ---"));
        assert!(out.contains("Teologia Geral"));
    }

    #[test]
    fn test_add_with_named_course() {
        let shell = run_session("1\nBo\nb@x.com\nGrego\n5\n");

        let bo = shell.roster().get(1).unwrap();
        assert_eq!(bo.course, "Grego");
    }

    #[test]
    fn test_change_status_with_default() {
        let shell = run_session("1\nAna\na@x.com\n\n3\n1\n\n5\n");

        assert_eq!(shell.roster().get(1).unwrap().status, STATUS_GRADUATED);
        let out = output(&shell);
        assert!(out.contains("Status of student 1 set to 'Formado'."));
    }

    #[test]
    fn test_change_status_explicit() {
        let shell = run_session("1\nAna\na@x.com\n\n3\n1\nInativo\n5\n");

        assert_eq!(shell.roster().get(1).unwrap().status, "Inativo");
        let out = output(&shell);
        assert!(out.contains("set to 'Inativo'."));
    }

    #[test]
    fn test_change_status_lists_before_prompting() {
        let shell = run_session("1\nAna\na@x.com\n\n3\n1\n\n5\n");

        let out = output(&shell);
        let list_pos = out.find("--- STUDENT LIST ---").unwrap();
        let prompt_pos = out.find("Id of the student to update:").unwrap();
        assert!(list_pos < prompt_pos);
    }

    #[test]
    fn test_change_status_not_found() {
        let shell = run_session("3\n7\n\n5\n");

        let out = output(&shell);
        assert!(out.contains("Error: no student with id 7."));
    }

    #[test]
    fn test_change_status_invalid_id_aborts() {
        // "abc" is rejected before the status prompt; "5" then exits
        let shell = run_session("1\nAna\na@x.com\n\n3\nabc\n5\n");

        assert_eq!(shell.roster().get(1).unwrap().status, STATUS_ACTIVE);
        let out = output(&shell);
        assert!(out.contains("Error: 'abc' is not a valid student id."));
        assert!(!out.contains("New status"));
    }

    #[test]
    fn test_remove() {
        let shell = run_session("1\nAna\na@x.com\n\n4\n1\n5\n");

        assert!(shell.roster().is_empty());
        let out = output(&shell);
        assert!(out.contains("Student 1 (Ana) removed."));
    }

    #[test]
    fn test_remove_not_found_keeps_roster() {
        let shell = run_session("1\nAna\na@x.com\n\n4\n9\n5\n");

        assert_eq!(shell.roster().len(), 1);
        let out = output(&shell);
        assert!(out.contains("Error: no student with id 9."));
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let shell = run_session(
            "1\nAna\na@x.com\n\n1\nBo\nb@x.com\n\n1\nCaio\nc@x.com\n\n4\n2\n5\n",
        );

        let ids: Vec<u64> = shell.roster().students().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_invalid_menu_choice_reported() {
        let shell = run_session("9\n5\n");

        let out = output(&shell);
        assert!(out.contains("Error: invalid option '9', expected 1-5."));
        // The loop keeps going and the exit choice is honored
        assert!(out.contains("Closing the student register"));
    }

    #[test]
    fn test_loop_continues_after_not_found() {
        let shell = run_session("4\n1\n1\nAna\na@x.com\n\n5\n");

        assert_eq!(shell.roster().len(), 1);
    }
}

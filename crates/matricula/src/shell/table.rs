//! Table rendering for the student list.

use std::fmt::Write as _;
use std::io::Write;

use chrono::NaiveDate;
use unicode_width::UnicodeWidthStr;

use crate::error::Result;
use crate::student::Student;

const HEADERS: [&str; 6] = ["ID", "Name", "Email", "Course", "Status", "Enrollment Date"];

/// Render the records as an aligned text grid.
///
/// The ID column is right-aligned; text columns are left-aligned. Column
/// widths follow the widest cell, measured in display columns so that
/// non-ASCII names line up.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render<W: Write>(out: &mut W, students: &[Student], date_format: &str) -> Result<()> {
    let rows: Vec<[String; 6]> = students
        .iter()
        .map(|s| {
            [
                s.id.to_string(),
                s.name.clone(),
                s.email.clone(),
                s.course.clone(),
                s.status.clone(),
                format_date(s.enrolled_on, date_format),
            ]
        })
        .collect();

    let mut widths: [usize; 6] = HEADERS.map(UnicodeWidthStr::width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    write_separator(out, &widths)?;
    write_row(out, &widths, &HEADERS.map(String::from))?;
    write_separator(out, &widths)?;
    for row in &rows {
        write_row(out, &widths, row)?;
    }
    write_separator(out, &widths)?;
    Ok(())
}

fn format_date(date: NaiveDate, format: &str) -> String {
    let mut rendered = String::new();
    if write!(rendered, "{}", date.format(format)).is_err() {
        // Unrenderable format string; fall back to the ISO date
        rendered.clear();
        let _ = write!(rendered, "{date}");
    }
    rendered
}

fn write_row<W: Write>(out: &mut W, widths: &[usize; 6], cells: &[String; 6]) -> Result<()> {
    write!(out, "|")?;
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let pad = " ".repeat(width - cell.width());
        if i == 0 {
            write!(out, " {pad}{cell} |")?;
        } else {
            write!(out, " {cell}{pad} |")?;
        }
    }
    writeln!(out)?;
    Ok(())
}

fn write_separator<W: Write>(out: &mut W, widths: &[usize; 6]) -> Result<()> {
    write!(out, "+")?;
    for width in widths {
        write!(out, "{}+", "-".repeat(width + 2))?;
    }
    writeln!(out)?;
    Ok(())
}

use std::io::Write;

use unicode_width::UnicodeWidthStr;

use super::{display_name, languages_by_name};
use crate::error::Result;
use crate::loc::ProjectSummary;

const COL_PADDING: &str = "    ";
const HEADERS: [&str; 5] = ["Language", "Files", "Blank", "Comment", "Code"];

struct Row<'a> {
    name: &'a str,
    files: String,
    blank: String,
    comment: String,
    code: String,
}

impl Row<'_> {
    fn cells(&self) -> [&str; 5] {
        [self.name, &self.files, &self.blank, &self.comment, &self.code]
    }
}

/// Left-align by display width so wide characters keep columns straight.
fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{s}", " ".repeat(fill))
}

/// Table of languages with file and line counts, then a total row.
pub fn write_console(summary: &ProjectSummary, out: &mut dyn Write) -> Result<()> {
    if summary.languages.is_empty() {
        writeln!(out, "No recognized source files found.")?;
        return Ok(());
    }

    let rows: Vec<Row> = languages_by_name(summary)
        .into_iter()
        .map(|l| Row {
            name: display_name(l.language),
            files: l.files.to_string(),
            blank: l.counts.blank.to_string(),
            comment: l.counts.comment.to_string(),
            code: l.counts.code.to_string(),
        })
        .collect();
    let total = Row {
        name: "Total",
        files: String::new(),
        blank: summary.totals.blank.to_string(),
        comment: summary.totals.comment.to_string(),
        code: summary.totals.code.to_string(),
    };

    let mut widths = HEADERS.map(UnicodeWidthStr::width);
    for row in rows.iter().chain(std::iter::once(&total)) {
        for (w, cell) in widths.iter_mut().zip(row.cells()) {
            *w = (*w).max(cell.width());
        }
    }

    let total_width = widths.iter().sum::<usize>() + COL_PADDING.len() * (widths.len() - 1);
    let divider = "-".repeat(total_width);

    writeln!(out, "{divider}")?;
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (h, w))| if i + 1 == HEADERS.len() { h.to_string() } else { pad_left(h, w) })
        .collect();
    writeln!(out, "{}", header.join(COL_PADDING))?;
    writeln!(out, "{divider}")?;

    for row in &rows {
        write_row(out, row, &widths)?;
    }

    writeln!(out, "{divider}")?;
    write_row(out, &total, &widths)?;
    writeln!(out, "{divider}")?;
    Ok(())
}

fn write_row(out: &mut dyn Write, row: &Row, widths: &[usize; 5]) -> Result<()> {
    let cells: Vec<String> = row
        .cells()
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &w))| if i == 0 { pad_left(cell, w) } else { pad_right(cell, w) })
        .collect();
    writeln!(out, "{}", cells.join(COL_PADDING))?;
    Ok(())
}

#[cfg(test)]
#[path = "console_test.rs"]
mod tests;

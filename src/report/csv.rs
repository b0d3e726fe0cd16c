use std::io::Write;

use super::{display_name, languages_by_name};
use crate::error::Result;
use crate::loc::{Counts, ProjectSummary};

const HEADER: &str = "ID,Name,Description,Total Lines,Code Lines,Comment Lines,Blank Lines";

/// Quote a field when it holds a comma, quote or line break; embedded
/// quotes are doubled.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_record(out: &mut dyn Write, id: &str, name: &str, description: &str, c: &Counts) -> Result<()> {
    write!(
        out,
        "{},{},{},{},{},{},{}\r\n",
        escape(id),
        escape(name),
        escape(description),
        c.total(),
        c.code,
        c.comment,
        c.blank
    )?;
    Ok(())
}

/// One row per language after an `ALL` row with the totals. Lines end in
/// CRLF.
pub fn write_csv(summary: &ProjectSummary, out: &mut dyn Write) -> Result<()> {
    write!(out, "{HEADER}\r\n")?;
    write_record(out, "ALL", "All", "All languages", &summary.totals)?;
    for language in languages_by_name(summary) {
        write_record(
            out,
            language.language,
            display_name(language.language),
            "",
            &language.counts,
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "csv_test.rs"]
mod tests;

use std::io::Write;

use super::{ReportMeta, display_name, languages_by_name, pathname};
use crate::error::Result;
use crate::loc::{Counts, ProjectSummary};

fn write_counts(out: &mut dyn Write, counts: &Counts) -> Result<()> {
    writeln!(
        out,
        "    Lines: {} total, {} code, {} comment, {} blank",
        counts.total(),
        counts.code,
        counts.comment,
        counts.blank
    )?;
    Ok(())
}

/// Plain text report: a header block, then a `Languages` and a `Files`
/// section.
pub fn write_text(summary: &ProjectSummary, meta: &ReportMeta, out: &mut dyn Write) -> Result<()> {
    let totals = &summary.totals;
    writeln!(out, "Line Count Report For {}", meta.project_name)?;
    writeln!(out, "{}", "-".repeat(80))?;
    writeln!(out, "Date: {}", meta.timestamp())?;
    writeln!(out, "Root: {}", meta.root.display())?;
    writeln!(out, "Number of files: {}", summary.file_count())?;
    writeln!(out, "Number unrecognized files: {}", summary.unrecognized)?;
    writeln!(out, "Number of languages: {}", summary.language_count())?;
    writeln!(out, "Total lines: {}", totals.total())?;
    writeln!(out, "Code lines: {}", totals.code)?;
    writeln!(out, "Comment lines: {}", totals.comment)?;
    writeln!(out, "Blank lines: {}", totals.blank)?;

    writeln!(out)?;
    writeln!(out, "Languages")?;
    writeln!(out, "{}", "-".repeat(9))?;
    for language in languages_by_name(summary) {
        writeln!(
            out,
            "{} ({} files)",
            display_name(language.language),
            language.files
        )?;
        write_counts(out, &language.counts)?;
        writeln!(out)?;
    }

    writeln!(out, "Files")?;
    writeln!(out, "{}", "-".repeat(5))?;
    for (i, (path, file)) in summary.files.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", pathname(path))?;
        write_counts(out, &file.counts)?;
        let mut names: Vec<&str> = file.languages.keys().map(|id| display_name(id)).collect();
        names.sort_unstable();
        writeln!(out, "    Languages: {}", names.join(", "))?;
    }
    Ok(())
}

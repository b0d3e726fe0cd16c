use std::io::Write;

use super::{FORMAT_VERSION, ReportMeta, display_name, languages_by_name, pathname};
use crate::error::Result;
use crate::loc::{Counts, ProjectSummary, UNKNOWN};

/// Escape text for use inside a double-quoted attribute.
fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn counts_attrs(c: &Counts) -> String {
    format!(
        "totalLines=\"{}\" codeLines=\"{}\" commentLines=\"{}\" blankLines=\"{}\"",
        c.total(),
        c.code,
        c.comment,
        c.blank
    )
}

pub fn write_xml(summary: &ProjectSummary, meta: &ReportMeta, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(
        out,
        "<locc formatVersion=\"{FORMAT_VERSION}\" date=\"{}\" projectName=\"{}\" numFiles=\"{}\" numUnrecognized=\"{}\" numLanguages=\"{}\" {}>",
        escape(&meta.timestamp()),
        escape(&meta.project_name),
        summary.file_count(),
        summary.unrecognized,
        summary.language_count(),
        counts_attrs(&summary.totals)
    )?;

    writeln!(out, "    <languages>")?;
    for language in languages_by_name(summary) {
        writeln!(
            out,
            "        <language name=\"{}\" displayName=\"{}\" numFiles=\"{}\" {}/>",
            escape(language.language),
            escape(display_name(language.language)),
            language.files,
            counts_attrs(&language.counts)
        )?;
    }
    writeln!(out, "    </languages>")?;

    writeln!(out, "    <files>")?;
    for (path, file) in &summary.files {
        let unrecognized = file.language == UNKNOWN.id;
        let open = format!(
            "        <file pathname=\"{}\" language=\"{}\" numLanguages=\"{}\"{} {}",
            escape(&pathname(path)),
            escape(file.language),
            file.languages.len(),
            if unrecognized { " unrecognized=\"true\"" } else { "" },
            counts_attrs(&file.counts)
        );
        if unrecognized || file.languages.is_empty() {
            writeln!(out, "{open}/>")?;
            continue;
        }
        writeln!(out, "{open}>")?;
        for (name, counts) in &file.languages {
            writeln!(
                out,
                "            <language name=\"{}\" {}/>",
                escape(name),
                counts_attrs(counts)
            )?;
        }
        writeln!(out, "        </file>")?;
    }
    writeln!(out, "    </files>")?;
    writeln!(out, "</locc>")?;
    Ok(())
}

#[cfg(test)]
#[path = "xml_test.rs"]
mod tests;

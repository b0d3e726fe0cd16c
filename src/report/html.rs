use std::io::Write;

use super::{ReportMeta, display_name, pathname};
use crate::error::Result;
use crate::loc::{Counts, ProjectSummary};

const STYLE: &str = "        <style>
            body {
                margin: 40px;
                padding: 0;
                font-family: sans-serif;
            }
            table {
                border: 1px solid #C3C3C3;
                border-collapse: collapse;
            }
            td, th {
                border: 1px solid #C3C3C3;
                padding: 5px 15px 5px 15px;
            }
            .CountCell {
                text-align: right;
            }
            .TotalCell {
                font-weight: bold;
            }
        </style>
";

/// Escape `&`, `<` and `>`. Characters outside printable ASCII become
/// numeric references; other control characters are dropped.
fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\n' | '\t' | '\r' | ' '..='~' => escaped.push(ch),
            c if (c as u32) < 0x7F => {}
            c => escaped.push_str(&format!("&#x{:X};", c as u32)),
        }
    }
    escaped
}

fn count_cells(out: &mut dyn Write, counts: &Counts, class: &str) -> Result<()> {
    for value in [counts.total(), counts.code, counts.comment, counts.blank] {
        writeln!(out, "                    <td class=\"{class}\">{value}</td>")?;
    }
    Ok(())
}

fn summary_row(out: &mut dyn Write, label: &str, value: &str) -> Result<()> {
    writeln!(out, "                <tr>")?;
    writeln!(out, "                    <td>{label}</td>")?;
    writeln!(out, "                    <td>{value}</td>")?;
    writeln!(out, "                </tr>")?;
    Ok(())
}

fn write_summary(summary: &ProjectSummary, meta: &ReportMeta, out: &mut dyn Write) -> Result<()> {
    let totals = &summary.totals;
    writeln!(out, "        <h2>Summary</h2>")?;
    writeln!(out, "        <table>")?;
    writeln!(out, "            <tbody>")?;
    summary_row(out, "Project", &escape(&meta.project_name))?;
    summary_row(out, "Root", &escape(&pathname(&meta.root)))?;
    summary_row(out, "Report date", &escape(&meta.timestamp()))?;
    summary_row(out, "Number of files", &summary.file_count().to_string())?;
    summary_row(out, "Number of languages", &summary.language_count().to_string())?;
    summary_row(out, "Unrecognized files", &summary.unrecognized.to_string())?;
    summary_row(out, "Total lines", &totals.total().to_string())?;
    summary_row(out, "Code lines", &totals.code.to_string())?;
    summary_row(out, "Comment lines", &totals.comment.to_string())?;
    summary_row(out, "Blank lines", &totals.blank.to_string())?;
    writeln!(out, "            </tbody>")?;
    writeln!(out, "        </table>")?;
    Ok(())
}

fn table_head(out: &mut dyn Write, first: &str, last: Option<&str>) -> Result<()> {
    writeln!(out, "        <table>")?;
    writeln!(out, "            <thead>")?;
    writeln!(out, "                <tr>")?;
    writeln!(out, "                    <th>{first}</th>")?;
    for heading in ["Total Lines", "Code Lines", "Comment Lines", "Blank Lines"] {
        writeln!(out, "                    <th class=\"CountCell\">{heading}</th>")?;
    }
    if let Some(last) = last {
        writeln!(out, "                    <th>{last}</th>")?;
    }
    writeln!(out, "                </tr>")?;
    writeln!(out, "            </thead>")?;
    writeln!(out, "            <tbody>")?;
    Ok(())
}

fn table_end(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "            </tbody>")?;
    writeln!(out, "        </table>")?;
    Ok(())
}

/// Language rows count each line under the language governing it, so
/// embedded CSS and JavaScript get their own rows.
fn write_languages(summary: &ProjectSummary, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "        <h2>Line Count by Language</h2>")?;
    table_head(out, "Name", None)?;

    let rollup = summary.line_languages();
    let mut rows: Vec<_> = rollup.values().collect();
    rows.sort_by_key(|l| display_name(l.language).to_lowercase());
    for language in rows {
        writeln!(out, "                <tr>")?;
        writeln!(
            out,
            "                    <td>{}</td>",
            escape(display_name(language.language))
        )?;
        count_cells(out, &language.counts, "CountCell")?;
        writeln!(out, "                </tr>")?;
    }

    writeln!(out, "                <tr>")?;
    writeln!(out, "                    <td class=\"TotalCell\">Total</td>")?;
    count_cells(out, &summary.totals, "TotalCell CountCell")?;
    writeln!(out, "                </tr>")?;
    table_end(out)
}

fn write_files(summary: &ProjectSummary, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "        <h2>Line Count by File</h2>")?;
    table_head(out, "Pathname", Some("Languages"))?;

    for (path, file) in &summary.files {
        let mut names: Vec<&str> = file.languages.keys().map(|id| display_name(id)).collect();
        names.sort_unstable();
        writeln!(out, "                <tr>")?;
        writeln!(out, "                    <td>{}</td>", escape(&pathname(path)))?;
        count_cells(out, &file.counts, "CountCell")?;
        writeln!(out, "                    <td>{}</td>", escape(&names.join(", ")))?;
        writeln!(out, "                </tr>")?;
    }

    writeln!(out, "                <tr>")?;
    writeln!(out, "                    <td class=\"TotalCell\">Total</td>")?;
    count_cells(out, &summary.totals, "TotalCell CountCell")?;
    writeln!(out, "                    <td></td>")?;
    writeln!(out, "                </tr>")?;
    table_end(out)
}

/// Standalone HTML page: summary table, per-language table and per-file
/// table with each file's language breakdown.
pub fn write_html(summary: &ProjectSummary, meta: &ReportMeta, out: &mut dyn Write) -> Result<()> {
    let title = format!("Line Count Report For {}", escape(&meta.project_name));
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "    <head>")?;
    writeln!(
        out,
        "        <meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\"/>"
    )?;
    writeln!(out, "        <title>{title}</title>")?;
    out.write_all(STYLE.as_bytes())?;
    writeln!(out, "    </head>")?;
    writeln!(out, "    <body>")?;
    writeln!(out, "        <h1>{title}</h1>")?;
    writeln!(out)?;
    write_summary(summary, meta, out)?;
    writeln!(out)?;
    write_languages(summary, out)?;
    writeln!(out)?;
    write_files(summary, out)?;
    writeln!(out, "    </body>")?;
    writeln!(out, "</html>")?;
    Ok(())
}

#[cfg(test)]
#[path = "html_test.rs"]
mod tests;

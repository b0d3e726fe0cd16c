//! Report renderers over a [`ProjectSummary`].
//!
//! Every renderer writes to any `io::Write`; picking a destination is
//! the caller's business.

mod console;
mod csv;
mod data;
mod html;
mod json;
mod text;
mod xml;
mod yaml;

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::loc::{LanguageSummary, ProjectSummary, find};

pub use console::write_console;
pub use csv::write_csv;
pub use data::ReportData;
pub use html::write_html;
pub use json::write_json;
pub use text::write_text;
pub use xml::write_xml;
pub use yaml::write_yaml;

/// Version of the JSON, YAML and XML layouts.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Console,
    Text,
    Json,
    Yaml,
    Csv,
    Xml,
    Html,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Console => "console",
            Self::Text => "text",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
            Self::Xml => "xml",
            Self::Html => "html",
        };
        f.write_str(name)
    }
}

/// Run details printed in report headers.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    pub project_name: String,
    pub root: PathBuf,
    pub date: DateTime<Local>,
}

impl ReportMeta {
    pub fn new(project_name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            project_name: project_name.into(),
            root: root.into(),
            date: Local::now(),
        }
    }

    pub(crate) fn timestamp(&self) -> String {
        self.date.to_rfc3339_opts(chrono::SecondsFormat::Secs, false)
    }
}

pub fn render(
    format: ReportFormat,
    summary: &ProjectSummary,
    meta: &ReportMeta,
    out: &mut dyn Write,
) -> Result<()> {
    match format {
        ReportFormat::Console => write_console(summary, out),
        ReportFormat::Text => write_text(summary, meta, out),
        ReportFormat::Json => write_json(summary, meta, out),
        ReportFormat::Yaml => write_yaml(summary, meta, out),
        ReportFormat::Csv => write_csv(summary, out),
        ReportFormat::Xml => write_xml(summary, meta, out),
        ReportFormat::Html => write_html(summary, meta, out),
    }
}

/// Display name for a language id. Ids without a profile are shown as is.
pub(crate) fn display_name(id: &str) -> &str {
    if id == crate::loc::UNKNOWN.id {
        return crate::loc::UNKNOWN.name;
    }
    find(id).map_or(id, |p| p.name)
}

/// Language summaries in display-name order, the order every report uses.
pub(crate) fn languages_by_name(summary: &ProjectSummary) -> Vec<&LanguageSummary> {
    let mut list: Vec<&LanguageSummary> = summary.languages.values().collect();
    list.sort_by(|a, b| {
        display_name(a.language)
            .to_lowercase()
            .cmp(&display_name(b.language).to_lowercase())
    });
    list
}

/// Path as shown in reports: `/`-separated on every platform.
pub(crate) fn pathname(path: &std::path::Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

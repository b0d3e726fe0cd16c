use serde::Serialize;

use super::{FORMAT_VERSION, ReportMeta, display_name, languages_by_name, pathname};
use crate::loc::{Counts, ProjectSummary, UNKNOWN};

/// Serializable view of a summary shared by the JSON and YAML reports.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData<'a> {
    pub format_version: u32,
    pub date: String,
    pub project_name: &'a str,
    pub num_files: usize,
    pub num_unrecognized: usize,
    pub num_languages: usize,
    #[serde(flatten)]
    pub totals: LineCounts,
    pub languages: Vec<LanguageData>,
    pub files: Vec<FileData>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineCounts {
    pub total_lines: usize,
    pub code_lines: usize,
    pub comment_lines: usize,
    pub blank_lines: usize,
}

impl From<Counts> for LineCounts {
    fn from(c: Counts) -> Self {
        Self {
            total_lines: c.total(),
            code_lines: c.code,
            comment_lines: c.comment,
            blank_lines: c.blank,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageData {
    pub name: &'static str,
    pub display_name: String,
    pub num_files: usize,
    #[serde(flatten)]
    pub counts: LineCounts,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    pub pathname: String,
    pub language: &'static str,
    pub num_languages: usize,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub unrecognized: bool,
    #[serde(flatten)]
    pub counts: LineCounts,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<FileLanguageData>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileLanguageData {
    pub name: &'static str,
    #[serde(flatten)]
    pub counts: LineCounts,
}

impl<'a> ReportData<'a> {
    pub fn new(summary: &ProjectSummary, meta: &'a ReportMeta) -> Self {
        let languages = languages_by_name(summary)
            .into_iter()
            .map(|l| LanguageData {
                name: l.language,
                display_name: display_name(l.language).to_string(),
                num_files: l.files,
                counts: l.counts.into(),
            })
            .collect();

        let files = summary
            .files
            .iter()
            .map(|(path, file)| {
                let unrecognized = file.language == UNKNOWN.id;
                let languages = if unrecognized {
                    Vec::new()
                } else {
                    file.languages
                        .iter()
                        .map(|(&name, &counts)| FileLanguageData {
                            name,
                            counts: counts.into(),
                        })
                        .collect()
                };
                FileData {
                    pathname: pathname(path),
                    language: file.language,
                    num_languages: file.languages.len(),
                    unrecognized,
                    counts: file.counts.into(),
                    languages,
                }
            })
            .collect();

        Self {
            format_version: FORMAT_VERSION,
            date: meta.timestamp(),
            project_name: &meta.project_name,
            num_files: summary.file_count(),
            num_unrecognized: summary.unrecognized,
            num_languages: summary.language_count(),
            totals: summary.totals.into(),
            languages,
            files,
        }
    }
}

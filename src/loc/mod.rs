//! Line classification engine.
//!
//! Given a file path and its content, [`classify`] picks a language,
//! scans the content once and labels every physical line as code,
//! comment or blank. [`aggregate`] folds the per-file results into a
//! [`ProjectSummary`].

mod classifier;
mod detect;
mod embed;
mod fsm;
mod lang_macro;
mod language;
mod stats;
mod summary;

use std::collections::BTreeSet;
use std::path::Path;

pub use classifier::ClassifyOptions;
pub use detect::{Detector, detect_by_shebang};
pub use language::{
    BlockComment, EmbeddingRule, StringDelim, SyntaxProfile, UNKNOWN, find, languages,
    supported_languages,
};
pub use stats::{Counts, FileStats, LineStats};
pub use summary::{FileSummary, LanguageSummary, ProjectSummary, aggregate};

use crate::error::Result;

/// Classify `content` as the file at `path`, with the built-in language
/// table and default options.
pub fn classify(path: &Path, content: &[u8], language: Option<&str>) -> Result<FileStats> {
    classify_with(
        &Detector::default(),
        &ClassifyOptions::default(),
        path,
        content,
        language,
    )
}

/// Classify with an explicit detector and options. Only an unknown
/// `language` override is an error; malformed content never is.
pub fn classify_with(
    detector: &Detector,
    options: &ClassifyOptions,
    path: &Path,
    content: &[u8],
    language: Option<&str>,
) -> Result<FileStats> {
    let first_line = first_line(content);
    let profile = detector.detect(path, first_line, language)?;
    let lines = classifier::classify_lines(content, profile, options, 0);
    tracing::debug!(
        path = %path.display(),
        language = profile.id,
        lines = lines.len(),
        "classified"
    );
    Ok(FileStats::new(path.to_path_buf(), profile.id, lines))
}

/// Classify with an already chosen profile.
pub fn classify_as(
    profile: &'static SyntaxProfile,
    options: &ClassifyOptions,
    path: &Path,
    content: &[u8],
) -> FileStats {
    let lines = classifier::classify_lines(content, profile, options, 0);
    FileStats::new(path.to_path_buf(), profile.id, lines)
}

/// Ids of every language the engine can classify.
pub fn list_supported_languages() -> BTreeSet<&'static str> {
    supported_languages()
}

/// The first line of `content` when it is valid UTF-8 and starts with `#!`.
pub(crate) fn first_line(content: &[u8]) -> Option<&str> {
    if !content.starts_with(b"#!") {
        return None;
    }
    let end = content
        .iter()
        .position(|&b| b == b'\n')
        .unwrap_or(content.len());
    std::str::from_utf8(&content[..end]).ok()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

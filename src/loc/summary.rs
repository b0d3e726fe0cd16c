use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::PathBuf;

use super::stats::{Counts, FileStats};

/// Totals for every file sharing one detected language.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LanguageSummary {
    pub language: &'static str,
    pub files: usize,
    pub counts: Counts,
}

/// What the summary keeps of a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub language: &'static str,
    pub counts: Counts,
    /// Counts per language governing the lines, host and embedded.
    pub languages: BTreeMap<&'static str, Counts>,
}

impl FileSummary {
    /// Add another entry for the same path. The smaller language id wins so
    /// the result does not depend on the order entries arrive in.
    fn absorb(&mut self, other: FileSummary) {
        self.language = self.language.min(other.language);
        self.counts += other.counts;
        for (id, counts) in other.languages {
            *self.languages.entry(id).or_default() += counts;
        }
    }
}

/// Aggregate over a file set, keyed by language id.
///
/// Built by folding files in with [`ProjectSummary::add`]; partial
/// summaries built on different threads combine with
/// [`ProjectSummary::merge`] in any order to the same result.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub languages: BTreeMap<&'static str, LanguageSummary>,
    pub files: BTreeMap<PathBuf, FileSummary>,
    pub totals: Counts,
    /// Files whose language could not be determined.
    pub unrecognized: usize,
    /// Files that were not classified at all (binary, too large, unreadable).
    pub skipped: usize,
}

impl ProjectSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, file: &FileStats) {
        let entry = self
            .languages
            .entry(file.language)
            .or_insert_with(|| LanguageSummary {
                language: file.language,
                ..LanguageSummary::default()
            });
        entry.files += 1;
        entry.counts += file.counts;
        self.totals += file.counts;
        if file.language == super::language::UNKNOWN.id {
            self.unrecognized += 1;
        }
        let summary = FileSummary {
            language: file.language,
            counts: file.counts,
            languages: file.by_language(),
        };
        self.add_file(file.path.clone(), summary);
    }

    /// Record a file entry, combining with an earlier entry for the same path.
    fn add_file(&mut self, path: PathBuf, summary: FileSummary) {
        match self.files.entry(path) {
            Entry::Vacant(slot) => {
                slot.insert(summary);
            }
            Entry::Occupied(mut slot) => slot.get_mut().absorb(summary),
        }
    }

    pub fn skip(&mut self) {
        self.skipped += 1;
    }

    /// Fold `other` into `self`.
    pub fn merge(mut self, other: ProjectSummary) -> ProjectSummary {
        for (id, summary) in other.languages {
            let entry = self
                .languages
                .entry(id)
                .or_insert_with(|| LanguageSummary {
                    language: id,
                    ..LanguageSummary::default()
                });
            entry.files += summary.files;
            entry.counts += summary.counts;
        }
        for (path, summary) in other.files {
            self.add_file(path, summary);
        }
        self.totals += other.totals;
        self.unrecognized += other.unrecognized;
        self.skipped += other.skipped;
        self
    }

    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    pub fn file_count(&self) -> usize {
        self.languages.values().map(|l| l.files).sum()
    }

    /// Totals keyed by the language governing each line rather than each
    /// file's host language, so `<style>` lines of an HTML page count as
    /// CSS. `files` is the number of files with lines in that language.
    pub fn line_languages(&self) -> BTreeMap<&'static str, LanguageSummary> {
        let mut rollup: BTreeMap<&'static str, LanguageSummary> = BTreeMap::new();
        for file in self.files.values() {
            for (&id, &counts) in &file.languages {
                let entry = rollup.entry(id).or_insert_with(|| LanguageSummary {
                    language: id,
                    ..LanguageSummary::default()
                });
                entry.files += 1;
                entry.counts += counts;
            }
        }
        rollup
    }

    /// Language summaries, largest code count first.
    pub fn by_code(&self) -> Vec<&LanguageSummary> {
        let mut list: Vec<&LanguageSummary> = self.languages.values().collect();
        list.sort_by(|a, b| {
            b.counts
                .code
                .cmp(&a.counts.code)
                .then_with(|| a.language.cmp(b.language))
        });
        list
    }
}

/// Fold a sequence of per-file results into one summary.
pub fn aggregate<'a, I>(files: I) -> ProjectSummary
where
    I: IntoIterator<Item = &'a FileStats>,
{
    let mut summary = ProjectSummary::new();
    for file in files {
        summary.add(file);
    }
    summary
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod tests;

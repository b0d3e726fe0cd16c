use std::collections::BTreeMap;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Classification of one physical line.
///
/// `blank` is true iff the line holds no non-whitespace byte, in which case
/// `code` and `comment` are both false. A non-blank line has at least one of
/// them set, and both when code is followed by a trailing comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineStats {
    pub blank: bool,
    pub code: bool,
    pub comment: bool,
    /// Id of the language whose rules produced this line.
    pub language: &'static str,
}

impl LineStats {
    pub(crate) fn new(code: bool, comment: bool, language: &'static str) -> Self {
        Self {
            blank: !code && !comment,
            code,
            comment,
            language,
        }
    }
}

/// Line totals. A line with code counts as code even when it also
/// carries a comment, so `code + comment + blank` is the line total.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl Counts {
    pub fn total(&self) -> usize {
        self.code + self.comment + self.blank
    }

    pub fn record(&mut self, line: &LineStats) {
        if line.code {
            self.code += 1;
        } else if line.comment {
            self.comment += 1;
        } else {
            self.blank += 1;
        }
    }

    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }
}

impl Add for Counts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            code: self.code + other.code,
            comment: self.comment + other.comment,
            blank: self.blank + other.blank,
        }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, other: Self) {
        self.code += other.code;
        self.comment += other.comment;
        self.blank += other.blank;
    }
}

impl Sum for Counts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> FromIterator<&'a LineStats> for Counts {
    fn from_iter<I: IntoIterator<Item = &'a LineStats>>(iter: I) -> Self {
        let mut counts = Self::default();
        for line in iter {
            counts.record(line);
        }
        counts
    }
}

/// Result of classifying one file. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStats {
    pub path: PathBuf,
    /// Id of the detected language (`unknown` when undetermined).
    pub language: &'static str,
    pub lines: Vec<LineStats>,
    pub counts: Counts,
}

impl FileStats {
    pub(crate) fn new(path: PathBuf, language: &'static str, lines: Vec<LineStats>) -> Self {
        let counts = lines.iter().collect();
        Self {
            path,
            language,
            lines,
            counts,
        }
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    /// Counts split by the language governing each line, so an HTML file
    /// with a `<style>` block reports both HTML and CSS lines.
    pub fn by_language(&self) -> BTreeMap<&'static str, Counts> {
        let mut map: BTreeMap<&'static str, Counts> = BTreeMap::new();
        for line in &self.lines {
            map.entry(line.language).or_default().record(line);
        }
        map
    }
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod tests;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use super::language::{SyntaxProfile, UNKNOWN, find, languages};
use crate::error::{LoccError, Result};

/// Maps a file to the syntax profile used to classify it.
///
/// Priority: explicit override, exact file name, longest matching
/// extension, shebang interpreter, then the `unknown` profile.
#[derive(Debug, Default, Clone)]
pub struct Detector {
    extra: HashMap<String, &'static SyntaxProfile>,
    removed: HashSet<String>,
}

impl Detector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `ext` (without the leading dot, case-insensitive) to `language`,
    /// replacing any built-in mapping.
    pub fn with_extension(mut self, ext: &str, language: &str) -> Result<Self> {
        let profile = find(language).ok_or_else(|| LoccError::UnknownLanguage(language.to_string()))?;
        let ext = normalize_ext(ext);
        self.removed.remove(&ext);
        self.extra.insert(ext, profile);
        Ok(self)
    }

    /// Stop recognising `ext`. Unknown extensions are ignored.
    pub fn without_extension(mut self, ext: &str) -> Self {
        let ext = normalize_ext(ext);
        self.extra.remove(&ext);
        self.removed.insert(ext);
        self
    }

    /// Detect the language of `path`. `first_line` enables shebang
    /// detection; `language` forces a profile and fails when unknown.
    pub fn detect(
        &self,
        path: &Path,
        first_line: Option<&str>,
        language: Option<&str>,
    ) -> Result<&'static SyntaxProfile> {
        if let Some(id) = language {
            return find(id).ok_or_else(|| LoccError::UnknownLanguage(id.to_string()));
        }

        let file_name = path.file_name().and_then(|n| n.to_str());

        if let Some(name) = file_name {
            if let Some(profile) = languages().iter().find(|p| p.filenames.contains(&name)) {
                return Ok(profile);
            }
            if let Some(profile) = self.by_extension(name) {
                return Ok(profile);
            }
        }

        Ok(first_line.and_then(detect_by_shebang).unwrap_or(&UNKNOWN))
    }

    /// Try every dotted suffix of the file name, longest first, so
    /// `build.gradle.kts` matches `gradle.kts` before `kts`.
    fn by_extension(&self, file_name: &str) -> Option<&'static SyntaxProfile> {
        // A leading dot marks a hidden file, not an extension
        let name = file_name.strip_prefix('.').unwrap_or(file_name);
        name.match_indices('.')
            .map(|(i, _)| normalize_ext(&name[i + 1..]))
            .filter(|ext| !ext.is_empty() && !self.removed.contains(ext))
            .find_map(|ext| self.lookup_extension(&ext))
    }

    fn lookup_extension(&self, ext: &str) -> Option<&'static SyntaxProfile> {
        if let Some(profile) = self.extra.get(ext) {
            return Some(profile);
        }
        languages()
            .iter()
            .find(|p| p.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

fn normalize_ext(ext: &str) -> String {
    ext.trim_start_matches('.').to_ascii_lowercase()
}

/// Detect a language from a `#!` interpreter line.
pub fn detect_by_shebang(first_line: &str) -> Option<&'static SyntaxProfile> {
    let line = first_line.trim();
    let command = line.strip_prefix("#!")?;

    // Extract the interpreter name from patterns like:
    //   #!/usr/bin/env python3
    //   #!/usr/bin/env -S python3 -u
    //   #!/bin/bash
    let mut words = command.split_whitespace();
    let first = words.next()?;
    let interpreter = first.rsplit('/').next().unwrap_or(first);

    let prog = if interpreter == "env" {
        words.find(|w| !w.starts_with('-'))?
    } else {
        interpreter
    };

    // Versioned interpreters (python3.12) match their base name
    languages().iter().find(|profile| {
        profile.shebangs.iter().any(|shebang| {
            prog == *shebang
                || prog
                    .strip_prefix(shebang)
                    .is_some_and(|v| v.starts_with(|c: char| c.is_ascii_digit() || c == '.'))
        })
    })
}

#[cfg(test)]
#[path = "detect_test.rs"]
mod tests;

//! `locc.toml` configuration.
//!
//! ```toml
//! include = ["src/**"]
//! exclude = ["**/generated/**"]
//! formats = ["console", "json"]
//! languages = ["rust", "python"]
//! count_doc_strings = true
//! count_unrecognized = false
//! max_file_size = 1048576
//! jobs = 4
//! project_name = "demo"
//!
//! [extensions]
//! tpl = "html"
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LoccError, Result};
use crate::loc::{ClassifyOptions, Detector, find};
use crate::report::ReportFormat;
use crate::walk::{CountSettings, GlobFilter};

/// Default file name looked up in the counted directory.
pub const CONFIG_FILE: &str = "locc.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoccConfig {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub formats: Vec<ReportFormat>,
    /// Only count these language ids; empty counts all.
    pub languages: Vec<String>,
    /// Extra extension mappings, extension to language id.
    pub extensions: BTreeMap<String, String>,
    pub count_doc_strings: bool,
    pub count_unrecognized: bool,
    pub max_file_size: Option<u64>,
    pub jobs: Option<usize>,
    pub project_name: Option<String>,
    /// Accepted so existing plugin configs parse; reports still go to
    /// stdout.
    #[serde(alias = "reports_dir")]
    pub output_dir: Option<PathBuf>,
}

impl Default for LoccConfig {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            formats: vec![ReportFormat::Console],
            languages: Vec::new(),
            extensions: BTreeMap::new(),
            count_doc_strings: true,
            count_unrecognized: true,
            max_file_size: None,
            jobs: None,
            project_name: None,
            output_dir: None,
        }
    }
}

impl LoccConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| LoccError::io(path, e))?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `locc.toml` from `dir` when present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject unknown language ids, unusable limits and invalid globs.
    pub fn validate(&self) -> Result<()> {
        for id in self.languages.iter().chain(self.extensions.values()) {
            if find(id).is_none() {
                return Err(LoccError::Config(format!("unknown language '{id}'")));
            }
        }
        if self.extensions.keys().any(|ext| ext.trim_start_matches('.').is_empty()) {
            return Err(LoccError::Config("empty extension in [extensions]".to_string()));
        }
        if self
            .output_dir
            .as_ref()
            .is_some_and(|dir| dir.as_os_str().is_empty())
        {
            return Err(LoccError::Config("output_dir must not be empty".to_string()));
        }
        if self.jobs == Some(0) {
            return Err(LoccError::Config("jobs must be at least 1".to_string()));
        }
        GlobFilter::new(&self.include, &self.exclude)
            .map_err(|e| LoccError::Config(e.to_string()))?;
        Ok(())
    }

    /// Resolve into the settings of a counting run.
    pub fn settings(&self, force_language: Option<&str>) -> Result<CountSettings> {
        self.validate()?;

        let mut detector = Detector::new();
        for (ext, language) in &self.extensions {
            detector = detector.with_extension(ext, language)?;
        }

        let force_language = force_language
            .map(|id| find(id).ok_or_else(|| LoccError::UnknownLanguage(id.to_string())))
            .transpose()?;

        // Validated above, so every id resolves
        let languages: BTreeSet<&'static str> = self
            .languages
            .iter()
            .filter_map(|id| find(id))
            .map(|p| p.id)
            .collect();

        Ok(CountSettings {
            detector,
            options: ClassifyOptions {
                count_doc_strings: self.count_doc_strings,
            },
            filter: GlobFilter::new(&self.include, &self.exclude)?,
            languages,
            force_language,
            count_unrecognized: self.count_unrecognized,
            max_file_size: self.max_file_size,
            jobs: self.jobs,
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

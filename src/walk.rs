use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::{LoccError, Result};
use crate::loc::{
    ClassifyOptions, Detector, FileStats, ProjectSummary, SyntaxProfile, classify_as,
    classify_with,
};
use crate::util::{is_binary_reader, strip_bom};

/// Include/exclude globs, matched against paths relative to the walk root.
#[derive(Debug, Clone)]
pub struct GlobFilter {
    /// `None` includes everything not excluded.
    include: Option<GlobSet>,
    exclude: GlobSet,
}

impl GlobFilter {
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        let include = if include.is_empty() {
            None
        } else {
            Some(build_glob_set(include)?)
        };
        Ok(Self {
            include,
            exclude: build_glob_set(exclude)?,
        })
    }

    pub fn matches(&self, path: &Path) -> bool {
        if self.exclude.is_match(path) {
            return false;
        }
        match &self.include {
            Some(include) => include.is_match(path),
            None => true,
        }
    }
}

impl Default for GlobFilter {
    fn default() -> Self {
        Self {
            include: None,
            exclude: GlobSet::empty(),
        }
    }
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

/// Everything a counting run needs besides the root path.
#[derive(Debug, Clone)]
pub struct CountSettings {
    pub detector: Detector,
    pub options: ClassifyOptions,
    pub filter: GlobFilter,
    /// Language ids to keep; empty keeps all.
    pub languages: BTreeSet<&'static str>,
    /// Classify every file with this profile instead of detecting.
    pub force_language: Option<&'static SyntaxProfile>,
    pub count_unrecognized: bool,
    /// Files larger than this many bytes are skipped.
    pub max_file_size: Option<u64>,
    /// Worker threads; `None` uses rayon's default pool.
    pub jobs: Option<usize>,
}

impl Default for CountSettings {
    fn default() -> Self {
        Self {
            detector: Detector::default(),
            options: ClassifyOptions::default(),
            filter: GlobFilter::default(),
            languages: BTreeSet::new(),
            force_language: None,
            count_unrecognized: true,
            max_file_size: None,
            jobs: None,
        }
    }
}

impl CountSettings {
    fn keeps(&self, stats: &FileStats) -> bool {
        if self.languages.is_empty() {
            return self.count_unrecognized || stats.language != crate::loc::UNKNOWN.id;
        }
        self.languages.contains(stats.language)
    }
}

/// Build a directory walker that respects `.gitignore` and skips `.git`.
pub fn walk(path: &Path) -> ignore::Walk {
    WalkBuilder::new(path)
        .hidden(false)
        .follow_links(false)
        .filter_entry(|entry| {
            !(entry.file_type().is_some_and(|ft| ft.is_dir()) && entry.file_name() == ".git")
        })
        .build()
}

/// Files under `root` that pass `filter`, as (absolute, relative) pairs
/// sorted by relative path. Unreadable directory entries are logged and
/// skipped.
pub fn collect_files(root: &Path, filter: &GlobFilter) -> Result<Vec<(PathBuf, PathBuf)>> {
    if !root.exists() {
        return Err(LoccError::io(
            root,
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
        ));
    }

    let mut files = Vec::new();
    for entry in walk(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                warn!("{err}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.into_path();
        let relative = relative_to(&path, root);
        if filter.matches(&relative) {
            files.push((path, relative));
        } else {
            debug!(path = %relative.display(), "excluded by glob");
        }
    }
    files.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(files)
}

/// `path` relative to `root`; a root that is itself a file yields its
/// file name.
fn relative_to(path: &Path, root: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
        _ => path
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| path.to_path_buf()),
    }
}

/// Read and classify one file. `Ok(None)` means the file was skipped as
/// binary or oversized.
pub fn count_file(path: &Path, relative: &Path, settings: &CountSettings) -> Result<Option<FileStats>> {
    let mut file = File::open(path).map_err(|e| LoccError::io(path, e))?;

    if let Some(max) = settings.max_file_size {
        let len = file.metadata().map_err(|e| LoccError::io(path, e))?.len();
        if len > max {
            debug!(path = %relative.display(), len, "skipping oversized file");
            return Ok(None);
        }
    }

    if is_binary_reader(&mut file).map_err(|e| LoccError::io(path, e))? {
        debug!(path = %relative.display(), "skipping binary file");
        return Ok(None);
    }

    let mut content = Vec::new();
    file.read_to_end(&mut content)
        .map_err(|e| LoccError::io(path, e))?;
    let content = strip_bom(&content);

    let stats = match settings.force_language {
        Some(profile) => classify_as(profile, &settings.options, relative, content),
        None => classify_with(&settings.detector, &settings.options, relative, content, None)?,
    };
    Ok(Some(stats))
}

/// Count every file under `root`. Files are classified in parallel, each
/// worker folding its own partial summary; partials are merged at the end.
pub fn count(root: &Path, settings: &CountSettings) -> Result<ProjectSummary> {
    let files = collect_files(root, &settings.filter)?;
    debug!(files = files.len(), root = %root.display(), "walk finished");

    let run = || {
        files
            .par_iter()
            .fold(ProjectSummary::new, |mut summary, (path, relative)| {
                match count_file(path, relative, settings) {
                    Ok(Some(stats)) if settings.keeps(&stats) => summary.add(&stats),
                    Ok(Some(_)) => {}
                    Ok(None) => summary.skip(),
                    Err(err) => {
                        warn!("skipping {err}");
                        summary.skip();
                    }
                }
                summary
            })
            .reduce(ProjectSummary::new, ProjectSummary::merge)
    };

    let summary = match settings.jobs {
        Some(jobs) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()
                .map_err(|e| LoccError::Config(format!("cannot start {jobs} workers: {e}")))?;
            pool.install(run)
        }
        None => run(),
    };

    info!(
        files = summary.file_count(),
        languages = summary.language_count(),
        skipped = summary.skipped,
        lines = summary.totals.total(),
        "count finished"
    );
    Ok(summary)
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;

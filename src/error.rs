use std::path::PathBuf;

/// Errors raised by the line counter.
///
/// Malformed source content is never an error: unterminated strings,
/// comments and embedded regions are resolved by classifying to end of
/// file. Only configuration and I/O problems surface here.
#[derive(thiserror::Error, Debug)]
pub enum LoccError {
    /// A language id was requested that has no syntax profile.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// A file could not be read.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value.
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid glob: {0}")]
    Glob(#[from] globset::Error),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// Writing a report to its sink failed.
    #[error("write error: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LoccError>;

impl LoccError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

//! Lines of code counter.
//!
//! [`loc`] classifies every physical line of a file as code, comment or
//! blank, following each language's comment and string syntax, nested
//! block comments and embedded languages (CSS and JavaScript inside
//! HTML). [`walk`] runs the classifier over a directory tree in parallel,
//! and [`report`] renders the resulting [`loc::ProjectSummary`].
//!
//! ```
//! use std::path::Path;
//!
//! let stats = locc::loc::classify(Path::new("main.rs"), b"// hi\nfn main() {}\n", None).unwrap();
//! assert_eq!(stats.counts.code, 1);
//! assert_eq!(stats.counts.comment, 1);
//! ```

pub mod config;
pub mod error;
pub mod loc;
pub mod report;
pub mod util;
pub mod walk;

pub use error::{LoccError, Result};
pub use loc::{
    ClassifyOptions, Counts, FileStats, LineStats, ProjectSummary, aggregate, classify,
    classify_with, list_supported_languages,
};

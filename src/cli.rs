/// CLI argument definitions for the `locc` command.
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::cli_help;
use locc::report::ReportFormat;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "locc", version, about = "Count lines of code, comments and blank lines")]
pub struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count code, comment and blank lines by language
    #[command(long_about = cli_help::COUNT)]
    Count(CountArgs),

    /// List supported languages
    #[command(long_about = cli_help::LANGUAGES)]
    Languages,

    /// Print a shell completion script
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Args)]
pub struct CountArgs {
    /// File or directory to count (default: current directory)
    pub path: Option<PathBuf>,

    /// Only count files matching this glob (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub include: Vec<String>,

    /// Skip files matching this glob (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Report format (repeatable; default: console)
    #[arg(short, long, value_enum)]
    pub format: Vec<ReportFormat>,

    /// Only count files of this language id (repeatable)
    #[arg(short, long, value_name = "ID")]
    pub language: Vec<String>,

    /// Classify every file as this language
    #[arg(long, value_name = "ID")]
    pub force_language: Option<String>,

    /// Configuration file (default: <PATH>/locc.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Count documentation strings as code instead of comments
    #[arg(long)]
    pub no_doc_strings: bool,

    /// Leave files of unknown language out of the counts
    #[arg(long)]
    pub exclude_unrecognized: bool,

    /// Skip files larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    pub max_file_size: Option<u64>,

    /// Worker threads (default: one per core)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Project name shown in report headers (default: directory name)
    #[arg(long)]
    pub project_name: Option<String>,
}

mod cli;
mod cli_help;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};

use cli::{Cli, Commands, CountArgs};
use locc::config::LoccConfig;
use locc::error::Result;
use locc::loc::languages;
use locc::report::{self, ReportMeta};
use locc::walk;

fn main() {
    let cli = Cli::parse();

    let filter = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (_, 0) => "warn",
        (_, 1) => "info",
        (_, 2) => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let result = match cli.command {
        Commands::Count(args) => run_count(&args),
        Commands::Languages => print_languages(),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "locc", &mut io::stdout());
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Directory whose `locc.toml` applies to `target`.
fn config_dir(target: &Path) -> &Path {
    if target.is_dir() {
        target
    } else {
        target.parent().unwrap_or(Path::new("."))
    }
}

/// Command line flags win over the configuration file.
fn apply_overrides(config: &mut LoccConfig, args: &CountArgs) {
    if !args.include.is_empty() {
        config.include = args.include.clone();
    }
    if !args.exclude.is_empty() {
        config.exclude = args.exclude.clone();
    }
    if !args.format.is_empty() {
        config.formats = args.format.clone();
    }
    if !args.language.is_empty() {
        config.languages = args.language.clone();
    }
    if args.no_doc_strings {
        config.count_doc_strings = false;
    }
    if args.exclude_unrecognized {
        config.count_unrecognized = false;
    }
    if args.max_file_size.is_some() {
        config.max_file_size = args.max_file_size;
    }
    if args.jobs.is_some() {
        config.jobs = args.jobs;
    }
    if args.project_name.is_some() {
        config.project_name = args.project_name.clone();
    }
}

fn project_name(config: &LoccConfig, root: &Path) -> String {
    if let Some(name) = &config.project_name {
        return name.clone();
    }
    root.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "project".to_string())
}

fn run_count(args: &CountArgs) -> Result<()> {
    let root = args.path.clone().unwrap_or_else(|| PathBuf::from("."));

    let mut config = match &args.config {
        Some(path) => LoccConfig::load(path)?,
        None => LoccConfig::discover(config_dir(&root))?,
    };
    apply_overrides(&mut config, args);
    if let Some(dir) = &config.output_dir {
        tracing::warn!(dir = %dir.display(), "output_dir is ignored, reports are written to stdout");
    }
    let settings = config.settings(args.force_language.as_deref())?;

    let summary = walk::count(&root, &settings)?;
    let meta = ReportMeta::new(project_name(&config, &root), &root);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (i, format) in config.formats.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        report::render(*format, &summary, &meta, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn print_languages() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{:<12} {:<20} Extensions / file names", "ID", "Name")?;
    for profile in languages() {
        let names: Vec<String> = profile
            .extensions
            .iter()
            .map(|e| format!(".{e}"))
            .chain(profile.filenames.iter().map(|f| f.to_string()))
            .collect();
        writeln!(out, "{:<12} {:<20} {}", profile.id, profile.name, names.join(" "))?;
    }
    Ok(())
}

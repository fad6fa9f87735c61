//! Entry point for the `ts-catalog` command line tool.

use std::path::{
    Path,
    PathBuf,
};
use std::process::ExitCode;

use clap::{
    Parser,
    Subcommand,
};
use serde::Serialize;
use thiserror::Error;
use ts_catalog::catalog::Catalog;
use ts_catalog::config::{
    self,
    ConfigError,
    LintSettings,
};
use ts_catalog::lint::{
    LintMessage,
    has_errors,
    lint_document,
};
use ts_catalog::syntax::{
    ParseError,
    parse_document,
    write_document,
};

#[derive(Parser)]
#[command(name = "ts-catalog", version, about = "Lint and query Qt Linguist TS translation files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check catalogs for placeholder mismatches, conflicting entries and
    /// incomplete translations.
    Lint {
        /// TS files to check.
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Settings file; defaults to `.ts-catalog.json` next to the first
        /// catalog when present.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Emit the findings as JSON instead of a text report.
        #[arg(long)]
        json: bool,
    },
    /// Resolve one (context, source) pair, falling back to the source string.
    Query {
        file: PathBuf,
        context: String,
        source: String,
    },
    /// Parse a catalog and re-serialize it in canonical Linguist layout.
    Fmt {
        file: PathBuf,
        /// Rewrite the file in place instead of printing to stdout.
        #[arg(long)]
        write: bool,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Report(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct FileReport {
    file: PathBuf,
    findings: Vec<LintMessage>,
}

fn main() -> ExitCode {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode, CliError> {
    match command {
        Command::Lint { files, config, json } => lint(&files, config.as_deref(), json),
        Command::Query { file, context, source } => {
            let document = parse_file(&file)?;
            let catalog = Catalog::from_document(&document);
            println!("{}", catalog.translate(&context, &source));
            Ok(ExitCode::SUCCESS)
        }
        Command::Fmt { file, write } => {
            let rendered = write_document(&parse_file(&file)?);
            if write {
                std::fs::write(&file, rendered)
                    .map_err(|source| CliError::Io { path: file, source })?;
            } else {
                print!("{rendered}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn lint(files: &[PathBuf], config: Option<&Path>, json: bool) -> Result<ExitCode, CliError> {
    let settings = load_settings(files, config)?;

    let mut reports = Vec::new();
    let mut failed = false;
    for file in files {
        let document = parse_file(file)?;
        let findings = lint_document(&document, &settings);
        failed = failed || has_errors(&findings);
        reports.push(FileReport { file: file.clone(), findings });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print_text_report(&reports);
    }

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn load_settings(files: &[PathBuf], config: Option<&Path>) -> Result<LintSettings, CliError> {
    if let Some(path) = config {
        return Ok(config::load_from_path(path)?);
    }
    let dir = files
        .first()
        .and_then(|file| file.parent())
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok(config::load_or_default(dir)?)
}

fn parse_file(path: &Path) -> Result<ts_catalog::TsDocument, CliError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| CliError::Io { path: path.to_path_buf(), source })?;
    parse_document(&content).map_err(|source| CliError::Parse { path: path.to_path_buf(), source })
}

fn print_text_report(reports: &[FileReport]) {
    let mut total = 0;
    for report in reports {
        for finding in &report.findings {
            total += 1;
            println!(
                "{}: {}: ({}, {:?}): {}",
                report.file.display(),
                finding.severity,
                finding.context,
                finding.source,
                finding.message
            );
        }
    }
    if total == 0 {
        println!("no findings");
    }
}

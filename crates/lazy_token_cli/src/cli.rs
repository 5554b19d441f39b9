//! Command-line front end for the lazy token counter.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use lazy_token_core::{Estimator, TokenBudget};
use log::LevelFilter;
use token_logging::{token_info, token_warn, LogDestination};

use crate::config::{self, ConfigError, FileConfig, DEFAULT_CONFIG_FILE};
use crate::input::{read_document, Source};
use crate::report::{count_document, render_json, render_text, summarize, Summary};

/// Exit status when the configured token budget is exceeded.
pub const EXIT_OVER_BUDGET: u8 = 2;

/// Estimate LLM token counts without a model-specific tokenizer
#[derive(Debug, Parser)]
#[command(name = "lazy-token")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files to count; `-` or no files reads standard input
    pub inputs: Vec<PathBuf>,

    /// Estimator used for the count: lazy, whitespace or chars
    #[arg(short, long)]
    pub estimator: Option<Estimator>,

    /// Token budget to check the total against
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Also print the individual tokens
    #[arg(short, long)]
    pub tokens: bool,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// RON config file (defaults to ./.lazy_token.ron when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log destination: off, terminal, file or both
    #[arg(long)]
    pub log: Option<LogDestination>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Effective options after merging flags, config file and defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub estimator: Estimator,
    pub budget: Option<TokenBudget>,
    pub log: LogDestination,
    pub level: LevelFilter,
}

impl Settings {
    pub fn resolve(cli: &Cli, file: &FileConfig) -> Self {
        Self {
            estimator: cli.estimator.or(file.estimator).unwrap_or_default(),
            budget: cli.limit.or(file.token_limit).map(TokenBudget::new),
            log: cli.log.or(file.log).unwrap_or_default(),
            level: if cli.verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let (file_config, ignored) = resolve_config(&cli, Path::new(DEFAULT_CONFIG_FILE))?;
    let settings = Settings::resolve(&cli, &file_config);

    token_logging::initialize(settings.log, settings.level);
    if let Some(err) = ignored {
        report_ignored_config(&err, settings.log, &mut std::io::stderr().lock());
    }

    let summary = execute(
        &cli,
        settings,
        &mut std::io::stdin().lock(),
        &mut std::io::stdout().lock(),
    )?;
    Ok(ExitCode::from(exit_status(&summary)))
}

/// Load `--config` strictly, or `default_path` leniently.
///
/// A broken default file yields the defaults plus the error that was skipped,
/// so the caller can report it once logging is set up.
pub fn resolve_config(
    cli: &Cli,
    default_path: &Path,
) -> Result<(FileConfig, Option<ConfigError>), ConfigError> {
    match &cli.config {
        Some(path) => Ok((config::load(path)?, None)),
        None => match config::load_optional(default_path) {
            Ok(file_config) => Ok((file_config, None)),
            Err(err) => Ok((FileConfig::default(), Some(err))),
        },
    }
}

/// Warn about a skipped default config. With logging off the warning goes
/// straight to `stderr`.
pub fn report_ignored_config(err: &ConfigError, log: LogDestination, stderr: &mut dyn Write) {
    if log == LogDestination::Off {
        let _ = writeln!(stderr, "Warning: Ignoring default config: {err}");
    } else {
        token_warn!("Ignoring default config: {}", err);
    }
}

/// Process exit status for a finished run.
pub fn exit_status(summary: &Summary) -> u8 {
    if summary.exceeds_budget() {
        EXIT_OVER_BUDGET
    } else {
        0
    }
}

/// Count every input of `cli` and write the summary to `out`.
pub fn execute(
    cli: &Cli,
    settings: Settings,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<Summary> {
    let mut reports = Vec::new();
    for source in Source::from_args(&cli.inputs) {
        let doc = read_document(&source, stdin)?;
        reports.push(count_document(&doc, settings.estimator, cli.tokens));
    }

    let summary = summarize(settings.estimator, reports, settings.budget);
    token_info!(
        "Counted {} tokens across {} input(s) with the {} estimator",
        summary.total_tokens,
        summary.reports.len(),
        summary.estimator
    );

    let rendered = if cli.json {
        let mut json = render_json(&summary).context("failed to serialize summary")?;
        json.push('\n');
        json
    } else {
        render_text(&summary)
    };
    out.write_all(rendered.as_bytes())
        .context("failed to write output")?;
    out.flush().context("failed to write output")?;
    Ok(summary)
}

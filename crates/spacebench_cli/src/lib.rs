//! spacebench command line front end.
//!
//! The binary in `main.rs` only parses arguments and dispatches to the command
//! functions here.
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use spacebench::prelude::{
    encode, load_options, save_options, validate_with, Configuration, FormatOptions,
    GenerationRunner, RunOptions, RunReport, TagStyle, ValidationMode,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging with a default filter.
///
/// Use `RUST_LOG` environment variable to override the default `info` filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Parser, Debug)]
#[command(name = "spacebench")]
#[command(about = "Generate synthetic spatial datasets for benchmarking")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write one data file per enabled family
    Generate(GenerateArgs),
    /// Check an options file without generating anything
    Validate(ValidateArgs),
    /// Write an options file with defaults or the values of an existing one
    Options(OptionsArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Options file to read; defaults are used when omitted
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Directory the data files are written to
    #[arg(long = "output-dir", default_value = ".")]
    pub output_dir: PathBuf,

    /// Base seed; a fresh seed is drawn and logged when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Apply the strict validation rules
    #[arg(long)]
    pub strict: bool,

    /// Tag quick-star polygons as QUICK-STAR-POLYGON instead of CONIC-SPIRAL
    #[arg(long = "per-family-tags")]
    pub per_family_tags: bool,

    /// Digits after the decimal point
    #[arg(long, default_value_t = 6)]
    pub precision: usize,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Options file to check; defaults are checked when omitted
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Apply the strict validation rules
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct OptionsArgs {
    /// Options file to start from
    #[arg(long)]
    pub from: Option<PathBuf>,

    /// Where to write the options; stdout when omitted
    pub output: Option<PathBuf>,
}

fn validation_mode(strict: bool) -> ValidationMode {
    if strict {
        ValidationMode::Strict
    } else {
        ValidationMode::Legacy
    }
}

/// Loads `path` or falls back to the default configuration.
pub fn load_configuration(path: Option<&Path>) -> Result<Configuration> {
    match path {
        Some(path) => load_options(path)
            .with_context(|| format!("failed to load options from {}", path.display())),
        None => Ok(Configuration::default()),
    }
}

pub fn generate(args: &GenerateArgs) -> Result<RunReport> {
    let cfg = load_configuration(args.options.as_deref())?;
    let tag_style = if args.per_family_tags {
        TagStyle::PerFamily
    } else {
        TagStyle::Legacy
    };
    let mut options = RunOptions::new(&args.output_dir)
        .with_validation(validation_mode(args.strict))
        .with_format(
            FormatOptions::default()
                .with_precision(args.precision)
                .with_tag_style(tag_style),
        );
    if let Some(seed) = args.seed {
        options = options.with_seed(seed);
    }

    let runner = GenerationRunner::try_new(cfg, options)?;
    let report = runner.run()?;
    info!(
        "Wrote {} shapes in {} files (seed {}).",
        report.total_shapes(),
        report.families.len(),
        report.seed
    );
    Ok(report)
}

/// Returns the validation message, or `None` if the configuration is valid.
pub fn validate(args: &ValidateArgs) -> Result<Option<String>> {
    let cfg = load_configuration(args.options.as_deref())?;
    Ok(validate_with(&cfg, validation_mode(args.strict))
        .err()
        .map(|e| match e.family {
            Some(family) => format!("{family}: {}", e.message),
            None => e.message,
        }))
}

pub fn options(args: &OptionsArgs, stdout: &mut dyn Write) -> Result<()> {
    let cfg = load_configuration(args.from.as_deref())?;
    match &args.output {
        Some(path) => save_options(&cfg, path)
            .with_context(|| format!("failed to write options to {}", path.display())),
        None => {
            stdout.write_all(encode(&cfg).as_bytes())?;
            Ok(())
        }
    }
}

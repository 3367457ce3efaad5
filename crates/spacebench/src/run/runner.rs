//! High-level runner that writes one data file per enabled family.
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng as RngCore, SeedableRng};
use tracing::{debug, info};

use crate::config::validate::{validate_with, ValidationMode};
use crate::config::{Configuration, Family};
use crate::error::{Error, Result};
use crate::generate::generator_with_format;
use crate::run::events::{EventSink, RunEvent, RunEventKind};
use crate::run::seed::{fresh_seed, seed_for_family};
use crate::shape::format::{FormatOptions, RecordFormatter};
use crate::shape::{Shape, ShapeKind};

/// Settings for a run that are not part of the options file.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory the data files are written to. Created if missing.
    pub output_dir: PathBuf,
    /// Base seed; a fresh one is drawn per run when `None`.
    pub seed: Option<u64>,
    pub validation: ValidationMode,
    pub format: FormatOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            seed: None,
            validation: ValidationMode::Legacy,
            format: FormatOptions::default(),
        }
    }
}

impl RunOptions {
    /// Creates options writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Fixes the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the validation rule set.
    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    /// Sets the record format.
    pub fn with_format(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }
}

/// What was written for one family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyReport {
    pub family: Family,
    pub path: PathBuf,
    /// Number of lines in the data file.
    pub shapes: usize,
}

/// Result of a complete run.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Base seed the family seeds were derived from.
    pub seed: u64,
    /// One entry per enabled family, in run order.
    pub families: Vec<FamilyReport>,
}

impl RunReport {
    pub fn family(&self, family: Family) -> Option<&FamilyReport> {
        self.families.iter().find(|r| r.family == family)
    }

    pub fn total_shapes(&self) -> usize {
        self.families.iter().map(|r| r.shapes).sum()
    }
}

/// Path of the data file for `family`: `<output_dir>/<prefix><stem>.txt`.
pub fn output_path(output_dir: &Path, cfg: &Configuration, family: Family) -> PathBuf {
    output_dir.join(format!("{}{}.txt", cfg.filename_prefix, family.file_stem()))
}

/// Generates one family from `cfg` and writes its records to `out`.
///
/// Returns the number of records written. Unlike [`GenerationRunner`], this does
/// not validate `cfg` and ignores the family's enabled flag.
pub fn run_family<W: Write + ?Sized>(
    cfg: &Configuration,
    family: Family,
    rng: &mut dyn RngCore,
    formatter: &RecordFormatter,
    out: &mut W,
) -> Result<usize> {
    let shapes = generate_family(cfg, family, &formatter.options, rng)?;
    write_shapes(formatter, &shapes, out)?;
    Ok(shapes.len())
}

fn generate_family(
    cfg: &Configuration,
    family: Family,
    format: &FormatOptions,
    rng: &mut dyn RngCore,
) -> Result<Vec<Shape>> {
    let shapes = generator_with_format(cfg, family, format).generate(cfg.scene_length, rng)?;
    let kind = ShapeKind::for_family(family);
    debug_assert!(
        shapes.iter().all(|s| s.kind == kind),
        "{family} generator produced a record that is not {kind:?}"
    );
    Ok(shapes)
}

fn write_shapes<W: Write + ?Sized>(
    formatter: &RecordFormatter,
    shapes: &[Shape],
    out: &mut W,
) -> io::Result<()> {
    for shape in shapes {
        formatter.write_record(out, shape)?;
    }
    Ok(())
}

/// Runs a validated [`Configuration`].
///
/// The configuration is only readable once the runner exists, so what runs is
/// always what [`GenerationRunner::try_new`] checked.
pub struct GenerationRunner {
    config: Configuration,
    options: RunOptions,
}

impl GenerationRunner {
    /// Validates `config` with the rule set from `options`.
    pub fn try_new(config: Configuration, options: RunOptions) -> Result<Self> {
        validate_with(&config, options.validation)?;
        Ok(Self { config, options })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Runs every enabled family, returning what was written.
    pub fn run(&self) -> Result<RunReport> {
        self.run_with_events(&mut ())
    }

    /// Like [`GenerationRunner::run`], reporting progress to `sink`.
    ///
    /// A failing family stops the run. Data files of families that finished before
    /// it are left in place, and the failing family leaves no file behind unless the
    /// failure happened while writing.
    pub fn run_with_events(&self, sink: &mut dyn EventSink) -> Result<RunReport> {
        let seed = self.options.seed.unwrap_or_else(fresh_seed);
        let families = self.config.enabled_families();
        info!("Using seed {} for {} families.", seed, families.len());

        if sink.wants(RunEventKind::RunStarted) {
            sink.send(RunEvent::RunStarted {
                seed,
                families: families.clone(),
            });
        }

        if !families.is_empty() {
            fs::create_dir_all(&self.options.output_dir)?;
        }

        let formatter = RecordFormatter::new(self.options.format);
        let mut report = RunReport {
            seed,
            families: Vec::with_capacity(families.len()),
        };

        for family in families {
            let family_report = self.write_family(family, seed, &formatter, sink)?;
            if sink.wants(RunEventKind::FamilyFinished) {
                sink.send(RunEvent::FamilyFinished {
                    report: family_report.clone(),
                });
            }
            report.families.push(family_report);
        }

        if sink.wants(RunEventKind::RunFinished) {
            sink.send(RunEvent::RunFinished {
                report: report.clone(),
            });
        }

        Ok(report)
    }

    fn write_family(
        &self,
        family: Family,
        base_seed: u64,
        formatter: &RecordFormatter,
        sink: &mut dyn EventSink,
    ) -> Result<FamilyReport> {
        let path = output_path(&self.options.output_dir, &self.config, family);
        if sink.wants(RunEventKind::FamilyStarted) {
            sink.send(RunEvent::FamilyStarted {
                family,
                path: path.clone(),
            });
        }

        let family_seed = seed_for_family(base_seed, family);
        debug!("Seed for {}: {}.", family, family_seed);
        let mut rng = StdRng::seed_from_u64(family_seed);
        let shapes = generate_family(&self.config, family, &formatter.options, &mut rng)?;

        info!("creating {} datafile [{}]", family, path.display());
        let write_err = |source: io::Error| Error::Write {
            family,
            path: path.clone(),
            source,
        };
        let file = File::create(&path).map_err(write_err)?;
        let mut out = BufWriter::new(file);
        write_shapes(formatter, &shapes, &mut out).map_err(write_err)?;
        out.flush().map_err(write_err)?;
        info!("{} {} were generated.", shapes.len(), family);

        Ok(FamilyReport {
            family,
            path,
            shapes: shapes.len(),
        })
    }
}

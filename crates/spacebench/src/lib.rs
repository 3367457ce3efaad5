#![forbid(unsafe_code)]
//! spacebench: synthetic spatial datasets for benchmarking spatial-data consumers.
//!
//! Modules:
//! - config: run configuration, per-family validation, and the options file codec
//! - generate: randomized shape generators, one per family
//! - shape: generated records and their text notation
//! - run: dispatcher that validates once and writes one data file per enabled family
//!
//! For a command line front end, see the `spacebench_cli` crate.
pub mod config;
pub mod error;
pub mod generate;
pub mod run;
pub mod shape;

/// Convenient re-exports for common types. Import with `use spacebench::prelude::*;`.
pub mod prelude {
    pub use crate::config::options::{
        decode, decode_onto, encode, load_options, load_options_onto, save_options,
    };
    pub use crate::config::validate::{validate, validate_with, ValidationMode};
    pub use crate::config::{
        ConicSpiralOptions, Configuration, Family, LineStringOptions, MidpointDisplacementOptions,
        PointOptions, PolygonOptions, QuickStarPolygonOptions, RandomWalkOptions, SquareOptions,
        TriangleOptions,
    };
    pub use crate::error::{Error, Result, ValidationError};
    pub use crate::generate::{
        generator_for, generator_with_format, ConicSpiralGenerator, LineStringGenerator,
        MidpointDisplacementGenerator, PointGenerator, PolygonGenerator, QuickStarPolygonGenerator,
        RandomWalkGenerator, ShapeGenerator, SquareGenerator, TriangleGenerator,
    };
    pub use crate::run::events::{EventSink, FnSink, RunEvent, RunEventKind, VecSink};
    pub use crate::run::runner::{
        output_path, run_family, FamilyReport, GenerationRunner, RunOptions, RunReport,
    };
    pub use crate::run::seed::{fresh_seed, seed_for_family};
    pub use crate::shape::format::{format_coordinate, FormatOptions, RecordFormatter, TagStyle};
    pub use crate::shape::{Shape, ShapeKind};
}

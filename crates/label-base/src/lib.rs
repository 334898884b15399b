//! Parametric label bases for ScrewUnit storage bins.
//!
//! [`BaseShapeGenerator`] turns a size variant and an optional depth into a
//! rounded plate whose top face is the z = 0 plane, plus the plate's footprint
//! for text and icon layout.

pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod sizes;
pub mod units;

pub use config::GeneratorConfig;
pub use error::{ConfigError, GenerateError};
pub use generator::{
    generate, BaseShapeGenerator, FilletOutcome, GenerationRequest, GenerationSummary,
    LabelBaseResult, ResolvedParameters,
};
pub use logging::init_tracing;
pub use sizes::{LabelDefaults, SizeVariant, DEFAULT_VARIANT_ID, SIZE_VARIANTS};
pub use units::{Length, LengthNormalizer, LengthUnit, StandardUnits, UnitError};

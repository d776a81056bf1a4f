//! rulemark-core - Scale geometry and tick generation for slide rules
//!
//! This crate turns declarative scale descriptions into positioned, leveled
//! and labeled tick marks, ready for a renderer or exporter.
//!
//! # Key Components
//!
//! - **Transform**: Monotonic value-to-coordinate mappings (log, log-log, sine, ...)
//! - **ScaleDefinition**: Domain, layout, subsections, and constant markers of one scale
//! - **Position engine**: Value to normalized position, angle, and arc length, and back
//! - **Generator**: Interval-sweep and exact-modulo tick generation with dedup
//! - **GeneratedScale**: Immutable tick list with nearest-tick and range queries
//!
//! # Example
//!
//! ```
//! use rulemark_core::{generate, GenerationConfig, ScaleDefinition, Subsection, Transform};
//!
//! let c = ScaleDefinition::new("C", Transform::Log, 1.0, 10.0)
//!     .with_subsection(Subsection::new(1.0, [1.0, 0.5, 0.1]).with_label_levels([0]));
//! let scale = generate(&c, &GenerationConfig::default());
//!
//! assert_eq!(scale.ticks()[0].normalized_position, 0.0);
//! assert_eq!(scale.label_position(10.0), Some(1.0));
//! ```

pub mod batch;
pub mod config;
pub mod definition;
pub mod error;
pub mod generated;
pub mod generator;
pub mod position;
pub mod precision;
pub mod style;
pub mod transform;

pub use batch::{generate_all, try_generate_all};
pub use config::{GenerationConfig, GenerationMode};
pub use definition::{
    ConstantMarker, LabelFormatter, Layout, ScaleDefinition, Subsection, TickDirection,
};
pub use error::{DefinitionError, DefinitionWarning, ScaleError, ScaleResult, ValidationReport};
pub use generated::{GeneratedScale, TickMark, TickSummary, MAJOR_TICK_THRESHOLD};
pub use generator::{generate, try_generate};
pub use position::is_in_domain;
pub use style::{default_styles, format_value, Color, TickStyle};
pub use transform::{CustomTransform, Transform, TransformFn};

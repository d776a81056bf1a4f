//! Error types for rulemark-core
//!
//! Provides error handling for:
//! - Scale definition validation (collected into a [`ValidationReport`])
//! - Generation config loading
//!
//! Contract violations during generation (angle queries on a straight scale,
//! subsections without any positive interval) are panics, not errors: a
//! definition is expected to pass validation before it is generated.

use thiserror::Error;

/// Main error type for rulemark operations
#[derive(Error, Debug)]
pub enum ScaleError {
    /// Scale definition failed validation
    #[error("Invalid scale definition '{name}': {}", summarize(.errors))]
    InvalidDefinition {
        name: String,
        errors: Vec<DefinitionError>,
    },

    /// Invalid generation config
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// TOML config parsing errors
    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML config serialization errors
    #[error("Failed to write TOML config: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// JSON config errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A structural or numeric problem with a scale definition
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DefinitionError {
    /// Begin or end value is NaN or infinite
    #[error("Domain endpoints must be finite (begin: {begin}, end: {end})")]
    NonFiniteDomain { begin: f64, end: f64 },

    /// Begin and end are equal
    #[error("Domain is empty: begin and end are both {value}")]
    EmptyDomain { value: f64 },

    /// Transform produces NaN or infinity at an endpoint
    #[error("Transform '{transform}' is not finite at {value}")]
    NonFiniteTransform { transform: String, value: f64 },

    /// Forward/inverse round trip drifts too far at an endpoint
    #[error("Transform '{transform}' does not invert at {value} (relative error {error:e})")]
    NonInvertibleTransform {
        transform: String,
        value: f64,
        error: f64,
    },

    /// Scale has no subsections
    #[error("Scale has no subsections")]
    EmptySubsections,

    /// Two subsections start at the same value
    #[error("Subsections {first} and {second} both start at {start}")]
    DuplicateSubsectionStart {
        first: usize,
        second: usize,
        start: f64,
    },

    /// Subsection starts are not ordered in the scale's direction
    #[error("Subsection {index} (start {start}) is out of order for this scale's direction")]
    SubsectionOutOfOrder { index: usize, start: f64 },

    /// Subsection start value is not finite
    #[error("Subsection {index} has a non-finite start value")]
    NonFiniteSubsectionStart { index: usize },

    /// Subsection has no level with a positive interval
    #[error("Subsection {index} has no positive tick interval")]
    NoPositiveInterval { index: usize },

    /// Physical length is zero, negative, or not finite
    #[error("Scale length must be positive, got {length}")]
    InvalidLength { length: f64 },

    /// Circular layout with a non-positive diameter or radius
    #[error("Circular layout needs positive diameter and radius (diameter: {diameter}, radius: {radius})")]
    InvalidCircularLayout { diameter: f64, radius: f64 },

    /// Scale has no tick styles
    #[error("Scale has no tick styles")]
    NoStyles,
}

/// A definition quirk that does not prevent generation
#[derive(Debug, Clone, PartialEq)]
pub enum DefinitionWarning {
    /// Subsection start is off the grid of one of its intervals, so the
    /// sweep and modulo generators may place or level ticks differently
    MisalignedSubsectionStart { index: usize, start: f64, interval: f64 },

    /// Interval has no short decimal form; a rational fixed-point was used
    ImpreciseInterval { index: usize, interval: f64 },

    /// Interval is not a whole multiple of the subsection's finest interval,
    /// so the modulo generator never lands on its ticks
    IntervalNotMultipleOfFinest {
        index: usize,
        interval: f64,
        finest: f64,
    },

    /// Constant marker lies outside the scale domain and will be skipped
    ConstantOutsideDomain { value: f64 },
}

impl std::fmt::Display for DefinitionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefinitionWarning::MisalignedSubsectionStart {
                index,
                start,
                interval,
            } => write!(
                f,
                "Subsection {} start {} is not a multiple of its interval {}",
                index, start, interval
            ),
            DefinitionWarning::ImpreciseInterval { index, interval } => write!(
                f,
                "Subsection {} interval {} has no exact decimal form",
                index, interval
            ),
            DefinitionWarning::IntervalNotMultipleOfFinest {
                index,
                interval,
                finest,
            } => write!(
                f,
                "Subsection {} interval {} is not a multiple of its finest interval {}",
                index, interval, finest
            ),
            DefinitionWarning::ConstantOutsideDomain { value } => {
                write!(f, "Constant marker at {} is outside the scale domain", value)
            }
        }
    }
}

/// Everything a validation pass found
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// Problems that make the definition unusable
    pub errors: Vec<DefinitionError>,
    /// Problems worth knowing about
    pub warnings: Vec<DefinitionWarning>,
}

impl ValidationReport {
    /// Whether the definition can be generated
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert into a result, keeping only the errors
    pub fn into_result(self, name: &str) -> ScaleResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ScaleError::InvalidDefinition {
                name: name.to_string(),
                errors: self.errors,
            })
        }
    }
}

fn summarize(errors: &[DefinitionError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for rulemark operations
pub type ScaleResult<T> = Result<T, ScaleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_definition_display() {
        let err = ScaleError::InvalidDefinition {
            name: "C".to_string(),
            errors: vec![
                DefinitionError::EmptySubsections,
                DefinitionError::EmptyDomain { value: 1.0 },
            ],
        };
        let message = err.to_string();
        assert!(message.contains("'C'"));
        assert!(message.contains("no subsections"));
        assert!(message.contains("both 1"));
    }

    #[test]
    fn test_definition_error_display() {
        let err = DefinitionError::DuplicateSubsectionStart {
            first: 0,
            second: 1,
            start: 2.0,
        };
        assert!(err.to_string().contains("start at 2"));
    }

    #[test]
    fn test_report_into_result() {
        let report = ValidationReport::default();
        assert!(report.is_valid());
        assert!(report.into_result("C").is_ok());

        let report = ValidationReport {
            errors: vec![DefinitionError::EmptySubsections],
            warnings: Vec::new(),
        };
        assert!(!report.is_valid());
        assert!(matches!(
            report.into_result("D"),
            Err(ScaleError::InvalidDefinition { .. })
        ));
    }

    #[test]
    fn test_warning_display() {
        let warning = DefinitionWarning::ImpreciseInterval {
            index: 2,
            interval: 1.0 / 3.0,
        };
        assert!(warning.to_string().contains("Subsection 2"));
    }
}

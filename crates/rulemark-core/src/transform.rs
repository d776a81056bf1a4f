//! Value to coordinate transforms for slide rule scales
//!
//! A transform is a monotonic, invertible mapping from a domain value to a
//! one-dimensional coordinate. The position engine normalizes the coordinate
//! against the scale's endpoints, so only differences matter: `log10(x)` and
//! `log10(x) + 3` place ticks identically.
//!
//! Built-in transforms cover the classic scale families:
//! - Logarithmic: C/D (`Log`), A/B (`HalfLog`), K (`ThirdLog`), CI (`ReciprocalLog`)
//! - Log-log: LL1-LL3 (`LogLog`), LL0x (`NegativeLogLog`)
//! - Trigonometric: S (`Sine`), T (`Tangent`), ST (`SmallAngleTangent`)
//! - Linear: L (`Linear`), Ln (`NaturalLog`)
//!
//! Anything else can be expressed with [`Transform::PowerOffset`] or a
//! closure pair via [`Transform::custom`].

use std::f64::consts::LN_10;
use std::fmt;
use std::sync::Arc;

/// A shareable one-argument mapping
pub type TransformFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// A named forward/inverse closure pair
#[derive(Clone)]
pub struct CustomTransform {
    name: String,
    forward: TransformFn,
    inverse: TransformFn,
}

impl CustomTransform {
    /// Create a custom transform from a forward and inverse function
    pub fn new(
        name: impl Into<String>,
        forward: impl Fn(f64) -> f64 + Send + Sync + 'static,
        inverse: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            forward: Arc::new(forward),
            inverse: Arc::new(inverse),
        }
    }

    /// Name of the transform
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for CustomTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomTransform")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Monotonic mapping between a scale value and its coordinate
#[derive(Clone, Debug)]
pub enum Transform {
    /// `log10(x)`
    Log,
    /// `log10(ln x)`, for `x > 1`
    LogLog,
    /// `log10(-ln x)`, for `0 < x < 1`
    NegativeLogLog,
    /// `x / ln 10`: reads natural logarithms against a `Log` scale
    NaturalLog,
    /// `x`
    Linear,
    /// `log10(10 sin x)`, angle in degrees
    Sine,
    /// `log10(10 tan x)`, angle in degrees
    Tangent,
    /// `log10(1 / x)`
    ReciprocalLog,
    /// `log10(x) / 2`
    HalfLog,
    /// `log10(x) / 3`
    ThirdLog,
    /// `log10(100 x)` with `x` converted from degrees to radians
    SmallAngleTangent,
    /// `exponent * log10(x + offset)`
    PowerOffset { exponent: f64, offset: f64 },
    /// User-supplied closure pair
    Custom(CustomTransform),
}

impl Transform {
    /// Build a custom transform from closures
    pub fn custom(
        name: impl Into<String>,
        forward: impl Fn(f64) -> f64 + Send + Sync + 'static,
        inverse: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Transform::Custom(CustomTransform::new(name, forward, inverse))
    }

    /// Square-law log scale, `exponent * log10(x)`
    pub fn power(exponent: f64) -> Self {
        Transform::PowerOffset {
            exponent,
            offset: 0.0,
        }
    }

    /// Map a domain value to its coordinate
    pub fn forward(&self, value: f64) -> f64 {
        match self {
            Transform::Log => value.log10(),
            Transform::LogLog => value.ln().log10(),
            Transform::NegativeLogLog => (-value.ln()).log10(),
            Transform::NaturalLog => value / LN_10,
            Transform::Linear => value,
            Transform::Sine => (10.0 * value.to_radians().sin()).log10(),
            Transform::Tangent => (10.0 * value.to_radians().tan()).log10(),
            Transform::ReciprocalLog => -value.log10(),
            Transform::HalfLog => value.log10() / 2.0,
            Transform::ThirdLog => value.log10() / 3.0,
            Transform::SmallAngleTangent => (100.0 * value.to_radians()).log10(),
            Transform::PowerOffset { exponent, offset } => exponent * (value + offset).log10(),
            Transform::Custom(custom) => (custom.forward)(value),
        }
    }

    /// Map a coordinate back to its domain value
    pub fn inverse(&self, coordinate: f64) -> f64 {
        match self {
            Transform::Log => 10f64.powf(coordinate),
            Transform::LogLog => 10f64.powf(coordinate).exp(),
            Transform::NegativeLogLog => (-10f64.powf(coordinate)).exp(),
            Transform::NaturalLog => coordinate * LN_10,
            Transform::Linear => coordinate,
            Transform::Sine => (10f64.powf(coordinate) / 10.0).asin().to_degrees(),
            Transform::Tangent => (10f64.powf(coordinate) / 10.0).atan().to_degrees(),
            Transform::ReciprocalLog => 10f64.powf(-coordinate),
            Transform::HalfLog => 10f64.powf(2.0 * coordinate),
            Transform::ThirdLog => 10f64.powf(3.0 * coordinate),
            Transform::SmallAngleTangent => (10f64.powf(coordinate) / 100.0).to_degrees(),
            Transform::PowerOffset { exponent, offset } => {
                10f64.powf(coordinate / exponent) - offset
            }
            Transform::Custom(custom) => (custom.inverse)(coordinate),
        }
    }

    /// Name of the transform
    pub fn name(&self) -> &str {
        match self {
            Transform::Log => "log",
            Transform::LogLog => "log-log",
            Transform::NegativeLogLog => "negative-log-log",
            Transform::NaturalLog => "natural-log",
            Transform::Linear => "linear",
            Transform::Sine => "sine",
            Transform::Tangent => "tangent",
            Transform::ReciprocalLog => "reciprocal-log",
            Transform::HalfLog => "half-log",
            Transform::ThirdLog => "third-log",
            Transform::SmallAngleTangent => "small-angle-tangent",
            Transform::PowerOffset { .. } => "power-offset",
            Transform::Custom(custom) => custom.name(),
        }
    }

    /// Relative error of `inverse(forward(value))`
    ///
    /// Returns `None` when the forward coordinate is not finite.
    pub fn round_trip_error(&self, value: f64) -> Option<f64> {
        let coordinate = self.forward(value);
        if !coordinate.is_finite() {
            return None;
        }
        let back = self.inverse(coordinate);
        let error = (back - value).abs();
        Some(if value != 0.0 {
            error / value.abs()
        } else {
            error
        })
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

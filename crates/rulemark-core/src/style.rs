//! Tick styles, label colors, and default label formatting
//!
//! Ticks come in four canonical weights: major, medium, minor, and tiny.
//! A scale picks a style per hierarchy level; levels past the end of its
//! style list reuse the last (finest) style.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Visual appearance of a tick mark
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickStyle {
    /// Tick length relative to the longest tick (0.0 to 1.0)
    pub relative_length: f64,

    /// Whether ticks of this style always carry a label
    pub should_label: bool,

    /// Stroke width in points
    pub line_width: f64,
}

impl TickStyle {
    /// Full-length, labeled tick
    pub const MAJOR: TickStyle = TickStyle::new(1.0, true, 0.8);

    /// Three-quarter tick, e.g. halves
    pub const MEDIUM: TickStyle = TickStyle::new(0.75, false, 0.6);

    /// Half-length tick
    pub const MINOR: TickStyle = TickStyle::new(0.5, false, 0.5);

    /// Shortest tick for the finest subdivisions
    pub const TINY: TickStyle = TickStyle::new(0.25, false, 0.4);

    /// Create a new tick style
    pub const fn new(relative_length: f64, should_label: bool, line_width: f64) -> Self {
        Self {
            relative_length,
            should_label,
            line_width,
        }
    }

    /// Compare visual weight: length first, then stroke width
    pub fn weight_cmp(&self, other: &TickStyle) -> Ordering {
        self.relative_length
            .total_cmp(&other.relative_length)
            .then(self.line_width.total_cmp(&other.line_width))
    }

    /// Whether this style is strictly heavier than `other`
    pub fn outweighs(&self, other: &TickStyle) -> bool {
        self.weight_cmp(other) == Ordering::Greater
    }
}

/// The canonical major/medium/minor/tiny style ladder
pub fn default_styles() -> Vec<TickStyle> {
    vec![
        TickStyle::MAJOR,
        TickStyle::MEDIUM,
        TickStyle::MINOR,
        TickStyle::TINY,
    ]
}

/// Label color in RGB (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(0.8, 0.0, 0.0);

    /// Create a color from RGB components
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from hex string (e.g., "#CC0000" or "CC0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()? as f32 / 255.0;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()? as f32 / 255.0;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()? as f32 / 255.0;

        Some(Self::rgb(r, g, b))
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Format a tick value with the fewest decimals that represent it
///
/// Float noise from interval arithmetic is dropped, so `1.3000000000000003`
/// prints as `1.3`. At most six decimals are shown.
pub fn format_value(value: f64) -> String {
    const MAX_DECIMALS: usize = 6;

    if value == 0.0 {
        return "0".to_string();
    }

    let tolerance = 1e-9 * value.abs().max(1.0);
    for decimals in 0..=MAX_DECIMALS {
        let factor = 10f64.powi(decimals as i32);
        let rounded = (value * factor).round() / factor;
        if (rounded - value).abs() < tolerance {
            return format!("{:.prec$}", rounded, prec = decimals);
        }
    }
    format!("{:.prec$}", value, prec = MAX_DECIMALS)
}

//! Generated scales and their queries
//!
//! A [`GeneratedScale`] bundles a definition with its position-sorted,
//! deduplicated tick marks. It is built once by the generator and only
//! read afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::definition::ScaleDefinition;
use crate::style::{Color, TickStyle};

/// Minimum relative length for a tick to count as major
pub const MAJOR_TICK_THRESHOLD: f64 = 0.9;

/// A single tick mark on a scale
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    /// Position in domain units
    pub value: f64,

    /// Position along the scale (0.0 to 1.0)
    pub normalized_position: f64,

    /// Angle in degrees, circular layouts only
    pub angular_position: Option<f64>,

    /// Hierarchy level, `None` for constant markers
    pub level: Option<usize>,

    /// Length and weight
    pub style: TickStyle,

    /// Label text
    pub label: Option<String>,
}

impl TickMark {
    /// Check if this tick came from a constant marker
    pub fn is_constant(&self) -> bool {
        self.level.is_none()
    }
}

/// Tick counts for downstream statistics
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TickSummary {
    /// Total number of ticks
    pub total: usize,
    /// Ticks per hierarchy level
    pub per_level: BTreeMap<usize, usize>,
    /// Ticks with a label
    pub labeled: usize,
    /// Ticks from constant markers
    pub constants: usize,
}

/// A scale definition together with its computed tick marks
#[derive(Clone, Debug)]
pub struct GeneratedScale {
    definition: ScaleDefinition,
    ticks: Vec<TickMark>,
    /// (value, position) for labeled ticks, sorted by value
    label_positions: Vec<(f64, f64)>,
}

impl GeneratedScale {
    pub(crate) fn new(definition: ScaleDefinition, ticks: Vec<TickMark>) -> Self {
        let mut label_positions: Vec<(f64, f64)> = ticks
            .iter()
            .filter(|t| t.label.is_some())
            .map(|t| (t.value, t.normalized_position))
            .collect();
        label_positions.sort_by(|a, b| a.0.total_cmp(&b.0));

        Self {
            definition,
            ticks,
            label_positions,
        }
    }

    /// The source definition
    pub fn definition(&self) -> &ScaleDefinition {
        &self.definition
    }

    /// Scale name
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Ticks sorted by normalized position
    pub fn ticks(&self) -> &[TickMark] {
        &self.ticks
    }

    /// Get the number of ticks
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    /// Check if the scale has no ticks
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Label color from the definition
    pub fn label_color(&self) -> Option<Color> {
        self.definition.label_color
    }

    /// Normalized position of a labeled value, if one exists
    pub fn label_position(&self, value: f64) -> Option<f64> {
        let tolerance = 1e-9 * value.abs().max(1.0);
        let index = self
            .label_positions
            .partition_point(|(v, _)| *v < value - tolerance);
        self.label_positions
            .get(index)
            .filter(|(v, _)| (v - value).abs() <= tolerance)
            .map(|(_, position)| *position)
    }

    /// Labeled values and their positions, sorted by value
    pub fn label_positions(&self) -> &[(f64, f64)] {
        &self.label_positions
    }

    /// Normalized position of any value
    pub fn normalized_position(&self, value: f64) -> f64 {
        self.definition.normalized_position(value)
    }

    /// Value at a normalized position
    pub fn value_at_position(&self, position: f64) -> f64 {
        self.definition.value_at_position(position)
    }

    /// Value at an angle in degrees
    ///
    /// # Panics
    ///
    /// Panics if the layout is not circular.
    pub fn value_at_angle(&self, angle: f64) -> f64 {
        self.definition.value_at_angle(angle)
    }

    /// Tick closest to a normalized position
    ///
    /// Distance wraps around on circular layouts.
    pub fn nearest_tick(&self, position: f64) -> Option<&TickMark> {
        let circular = self.definition.layout.is_circular();
        self.ticks.iter().min_by(|a, b| {
            let da = position_distance(a.normalized_position, position, circular);
            let db = position_distance(b.normalized_position, position, circular);
            da.total_cmp(&db)
        })
    }

    /// Tick closest to an angle in degrees
    ///
    /// # Panics
    ///
    /// Panics if the layout is not circular.
    pub fn nearest_tick_to_angle(&self, angle: f64) -> Option<&TickMark> {
        self.require_circular("nearest_tick_to_angle");
        self.nearest_tick(angle.rem_euclid(360.0) / 360.0)
    }

    /// Ticks with a normalized position in `[lower, upper]`
    ///
    /// On circular layouts `lower > upper` selects the range that wraps
    /// through 0; on straight layouts the bounds are simply reordered.
    pub fn ticks_in_range(&self, lower: f64, upper: f64) -> Vec<&TickMark> {
        let within = |lo: f64, hi: f64| {
            self.ticks
                .iter()
                .filter(move |t| t.normalized_position >= lo && t.normalized_position <= hi)
        };

        if lower <= upper {
            within(lower, upper).collect()
        } else if self.definition.layout.is_circular() {
            within(lower, 1.0).chain(within(0.0, upper)).collect()
        } else {
            within(upper, lower).collect()
        }
    }

    /// Ticks between two angles in degrees, wrapping through 0
    ///
    /// # Panics
    ///
    /// Panics if the layout is not circular.
    pub fn ticks_in_angle_range(&self, start: f64, end: f64) -> Vec<&TickMark> {
        self.require_circular("ticks_in_angle_range");
        let lower = start.rem_euclid(360.0) / 360.0;
        let upper = end.rem_euclid(360.0) / 360.0;
        self.ticks_in_range(lower, upper)
    }

    /// Values of ticks at least `threshold` long
    pub fn major_tick_values(&self, threshold: f64) -> Vec<f64> {
        major_tick_values(self.ticks(), threshold)
    }

    /// Count ticks by level, label, and source
    pub fn tick_summary(&self) -> TickSummary {
        let mut summary = TickSummary {
            total: self.ticks.len(),
            ..Default::default()
        };
        for tick in &self.ticks {
            match tick.level {
                Some(level) => *summary.per_level.entry(level).or_default() += 1,
                None => summary.constants += 1,
            }
            if tick.label.is_some() {
                summary.labeled += 1;
            }
        }
        summary
    }

    fn require_circular(&self, operation: &str) {
        assert!(
            self.definition.layout.is_circular(),
            "{} called on scale '{}', which does not have a circular layout",
            operation,
            self.definition.name
        );
    }
}

/// Values of ticks whose relative length meets `threshold`
pub fn major_tick_values(ticks: &[TickMark], threshold: f64) -> Vec<f64> {
    ticks
        .iter()
        .filter(|t| t.style.relative_length >= threshold)
        .map(|t| t.value)
        .collect()
}

/// Distance between two normalized positions, the short way round if circular
pub fn position_distance(a: f64, b: f64, circular: bool) -> f64 {
    let delta = (a - b).abs();
    if circular {
        delta.min(1.0 - delta)
    } else {
        delta
    }
}

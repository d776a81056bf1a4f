//! Declarative scale definitions
//!
//! A [`ScaleDefinition`] is the single source of truth for one scale: its
//! transform, domain, layout, and the [`Subsection`]s that describe tick
//! density region by region. Tick marks are derived from it and never fed
//! back.
//!
//! # Subsection regions
//!
//! Subsections are listed in walk order, from `begin_value` toward
//! `end_value`: ascending start values on an ascending scale, descending
//! start values on an inverted one. Each region runs from its start to the
//! next subsection's start, or to `end_value` for the last. Regions are
//! half-open except the last, which includes `end_value`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::config::GenerationConfig;
use crate::error::{DefinitionError, DefinitionWarning, ValidationReport};
use crate::generator::multiplier::fixed_point_multiplier;
use crate::style::{default_styles, format_value, Color, TickStyle};
use crate::transform::Transform;

/// Default physical scale length: 10 inches in points
pub const DEFAULT_LENGTH_IN_POINTS: f64 = 720.0;

/// Formats a tick value into label text
pub type LabelFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Physical arrangement of a scale
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Layout {
    /// Straight rule
    #[default]
    Linear,
    /// Ring on a circular rule
    Circular {
        /// Overall instrument diameter in points
        diameter: f64,
        /// Radius of this scale's ring in points
        radius: f64,
    },
}

impl Layout {
    /// Check if this is a circular layout
    pub fn is_circular(&self) -> bool {
        matches!(self, Layout::Circular { .. })
    }

    /// Ring radius, for circular layouts
    pub fn radius(&self) -> Option<f64> {
        match self {
            Layout::Linear => None,
            Layout::Circular { radius, .. } => Some(*radius),
        }
    }
}

/// Which side of the scale line ticks are drawn on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickDirection {
    #[default]
    Up,
    Down,
}

/// A contiguous region with its own tick-interval hierarchy
#[derive(Clone)]
pub struct Subsection {
    /// Where this region's tick pattern begins
    pub start_value: f64,

    /// One step per hierarchy level, coarsest first; `<= 0` means absent
    pub tick_intervals: Vec<f64>,

    /// Hierarchy levels that carry text labels
    pub label_levels: BTreeSet<usize>,

    /// Region-specific label formatter
    pub label_formatter: Option<LabelFormatter>,
}

impl Subsection {
    /// Create a subsection with no labeled levels
    pub fn new(start_value: f64, tick_intervals: impl Into<Vec<f64>>) -> Self {
        Self {
            start_value,
            tick_intervals: tick_intervals.into(),
            label_levels: BTreeSet::new(),
            label_formatter: None,
        }
    }

    /// Label ticks at the given levels
    pub fn with_label_levels(mut self, levels: impl IntoIterator<Item = usize>) -> Self {
        self.label_levels = levels.into_iter().collect();
        self
    }

    /// Format this region's labels with `formatter`
    pub fn with_label_formatter(
        mut self,
        formatter: impl Fn(f64) -> String + Send + Sync + 'static,
    ) -> Self {
        self.label_formatter = Some(Arc::new(formatter));
        self
    }

    /// Levels that are present, with their intervals, coarsest first
    pub fn active_levels(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.tick_intervals
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, interval)| *interval > 0.0)
    }

    /// Smallest positive interval, the sweep granularity
    pub fn finest_interval(&self) -> Option<f64> {
        self.active_levels()
            .map(|(_, interval)| interval)
            .min_by(|a, b| a.total_cmp(b))
    }
}

impl fmt::Debug for Subsection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subsection")
            .field("start_value", &self.start_value)
            .field("tick_intervals", &self.tick_intervals)
            .field("label_levels", &self.label_levels)
            .field("label_formatter", &self.label_formatter.is_some())
            .finish()
    }
}

/// A tick pinned to a value regardless of interval rules
#[derive(Clone, Debug, PartialEq)]
pub struct ConstantMarker {
    pub value: f64,
    pub label: Option<String>,
    pub style: TickStyle,
}

impl ConstantMarker {
    /// Create an unlabeled major-weight marker
    pub fn new(value: f64) -> Self {
        Self {
            value,
            label: None,
            style: TickStyle::MAJOR,
        }
    }

    /// Attach a label, e.g. "π" or "∞"
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Draw the marker with `style`
    pub fn with_style(mut self, style: TickStyle) -> Self {
        self.style = style;
        self
    }
}

/// Complete description of one scale
#[derive(Clone)]
pub struct ScaleDefinition {
    /// Scale name, e.g. "C" or "LL3"
    pub name: String,

    /// Value to coordinate mapping
    pub transform: Transform,

    /// Value at normalized position 0
    pub begin_value: f64,

    /// Value at normalized position 1; may be below `begin_value`
    pub end_value: f64,

    /// Physical length in points
    pub length_in_points: f64,

    /// Straight or circular
    pub layout: Layout,

    /// Cosmetic tick side
    pub tick_direction: TickDirection,

    /// Regions in walk order
    pub subsections: Vec<Subsection>,

    /// Style per hierarchy level, coarsest first
    pub styles: Vec<TickStyle>,

    /// Scale-wide label formatter
    pub label_formatter: Option<LabelFormatter>,

    /// Label color
    pub label_color: Option<Color>,

    /// Fixed markers merged in after interval ticks
    pub constants: Vec<ConstantMarker>,
}

impl ScaleDefinition {
    /// Create a straight scale with default styles and no subsections
    pub fn new(
        name: impl Into<String>,
        transform: Transform,
        begin_value: f64,
        end_value: f64,
    ) -> Self {
        Self {
            name: name.into(),
            transform,
            begin_value,
            end_value,
            length_in_points: DEFAULT_LENGTH_IN_POINTS,
            layout: Layout::Linear,
            tick_direction: TickDirection::Up,
            subsections: Vec::new(),
            styles: default_styles(),
            label_formatter: None,
            label_color: None,
            constants: Vec::new(),
        }
    }

    /// Set the physical length
    pub fn with_length(mut self, length_in_points: f64) -> Self {
        self.length_in_points = length_in_points;
        self
    }

    /// Set the layout
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Lay the scale out on a ring of `radius` within a rule of `diameter`
    pub fn circular(self, diameter: f64, radius: f64) -> Self {
        self.with_layout(Layout::Circular { diameter, radius })
    }

    /// Set the tick direction
    pub fn with_tick_direction(mut self, direction: TickDirection) -> Self {
        self.tick_direction = direction;
        self
    }

    /// Append a subsection
    pub fn with_subsection(mut self, subsection: Subsection) -> Self {
        self.subsections.push(subsection);
        self
    }

    /// Append several subsections
    pub fn with_subsections(mut self, subsections: impl IntoIterator<Item = Subsection>) -> Self {
        self.subsections.extend(subsections);
        self
    }

    /// Replace the per-level styles
    pub fn with_styles(mut self, styles: Vec<TickStyle>) -> Self {
        self.styles = styles;
        self
    }

    /// Format every label with `formatter` unless a subsection overrides it
    pub fn with_label_formatter(
        mut self,
        formatter: impl Fn(f64) -> String + Send + Sync + 'static,
    ) -> Self {
        self.label_formatter = Some(Arc::new(formatter));
        self
    }

    /// Set the label color
    pub fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = Some(color);
        self
    }

    /// Add a constant marker
    pub fn with_constant(mut self, marker: ConstantMarker) -> Self {
        self.constants.push(marker);
        self
    }

    /// Whether values decrease from begin to end
    pub fn is_inverted(&self) -> bool {
        self.begin_value > self.end_value
    }

    /// Walk direction through the domain: `1.0` or `-1.0`
    pub fn direction(&self) -> f64 {
        if self.is_inverted() {
            -1.0
        } else {
            1.0
        }
    }

    /// Smaller domain endpoint
    pub fn domain_min(&self) -> f64 {
        self.begin_value.min(self.end_value)
    }

    /// Larger domain endpoint
    pub fn domain_max(&self) -> f64 {
        self.begin_value.max(self.end_value)
    }

    /// Style for a hierarchy level, clamped to the finest available
    pub fn style_for_level(&self, level: usize) -> TickStyle {
        match self.styles.get(level).or_else(|| self.styles.last()) {
            Some(style) => *style,
            None => TickStyle::TINY,
        }
    }

    /// Label text for `value` in subsection `index`
    pub fn format_label(&self, index: usize, value: f64) -> String {
        let formatter = self
            .subsections
            .get(index)
            .and_then(|s| s.label_formatter.as_ref())
            .or(self.label_formatter.as_ref());
        match formatter {
            Some(format) => format(value),
            None => format_value(value),
        }
    }

    /// Domain region covered by subsection `index`, clamped to the scale
    pub(crate) fn region(&self, index: usize) -> Region {
        let direction = self.direction();
        let start = self.subsections[index].start_value;
        let (end, closed) = match self.subsections.get(index + 1) {
            Some(next) => (next.start_value, false),
            None => (self.end_value, true),
        };

        // Clamp inward: never walk before begin or past end
        let (from, to) = if direction > 0.0 {
            (start.max(self.begin_value), end.min(self.end_value))
        } else {
            (start.min(self.begin_value), end.max(self.end_value))
        };

        // A region cut short by the scale end also owns the end value
        Region {
            from,
            to,
            closed: closed || (to == self.end_value && end != to),
            direction,
        }
    }

    /// Index of the subsection whose region contains `value`
    pub fn subsection_index_for(&self, value: f64) -> Option<usize> {
        if !self.contains_value(value) {
            return None;
        }
        (0..self.subsections.len())
            .rev()
            .find(|&index| (value - self.subsections[index].start_value) * self.direction() >= 0.0)
    }

    /// Validate with default tolerances
    pub fn validate(&self) -> ValidationReport {
        self.validate_with(&GenerationConfig::default())
    }

    /// Check the definition, collecting every error and warning
    pub fn validate_with(&self, config: &GenerationConfig) -> ValidationReport {
        let mut report = ValidationReport::default();
        self.check_domain(config, &mut report);
        self.check_layout(&mut report);
        self.check_subsections(config, &mut report);

        if self.styles.is_empty() {
            report.errors.push(DefinitionError::NoStyles);
        }

        for marker in &self.constants {
            if !self.contains_value(marker.value) {
                report
                    .warnings
                    .push(DefinitionWarning::ConstantOutsideDomain {
                        value: marker.value,
                    });
            }
        }

        report
    }

    fn check_domain(&self, config: &GenerationConfig, report: &mut ValidationReport) {
        let (begin, end) = (self.begin_value, self.end_value);
        if !begin.is_finite() || !end.is_finite() {
            report
                .errors
                .push(DefinitionError::NonFiniteDomain { begin, end });
            return;
        }
        if begin == end {
            report
                .errors
                .push(DefinitionError::EmptyDomain { value: begin });
        }

        for value in [begin, end] {
            match self.transform.round_trip_error(value) {
                None => report.errors.push(DefinitionError::NonFiniteTransform {
                    transform: self.transform.name().to_string(),
                    value,
                }),
                Some(error) if !(error <= config.round_trip_tolerance) => {
                    report.errors.push(DefinitionError::NonInvertibleTransform {
                        transform: self.transform.name().to_string(),
                        value,
                        error,
                    })
                }
                Some(_) => {}
            }
        }
    }

    fn check_layout(&self, report: &mut ValidationReport) {
        let length = self.length_in_points;
        if !(length.is_finite() && length > 0.0) {
            report
                .errors
                .push(DefinitionError::InvalidLength { length });
        }
        if let Layout::Circular { diameter, radius } = self.layout {
            let positive = |x: f64| x.is_finite() && x > 0.0;
            if !positive(diameter) || !positive(radius) {
                report
                    .errors
                    .push(DefinitionError::InvalidCircularLayout { diameter, radius });
            }
        }
    }

    fn check_subsections(&self, config: &GenerationConfig, report: &mut ValidationReport) {
        if self.subsections.is_empty() {
            report.errors.push(DefinitionError::EmptySubsections);
            return;
        }

        let direction = self.direction();
        for (index, subsection) in self.subsections.iter().enumerate() {
            let start = subsection.start_value;
            if !start.is_finite() {
                report
                    .errors
                    .push(DefinitionError::NonFiniteSubsectionStart { index });
                continue;
            }

            if let Some(first) = self.subsections[..index]
                .iter()
                .position(|earlier| earlier.start_value == start)
            {
                report.errors.push(DefinitionError::DuplicateSubsectionStart {
                    first,
                    second: index,
                    start,
                });
            } else if index > 0 && (start - self.subsections[index - 1].start_value) * direction < 0.0
            {
                report
                    .errors
                    .push(DefinitionError::SubsectionOutOfOrder { index, start });
            }

            let Some(finest) = subsection.finest_interval() else {
                report
                    .errors
                    .push(DefinitionError::NoPositiveInterval { index });
                continue;
            };

            let fixed = fixed_point_multiplier(&subsection.tick_intervals, config.max_decimal_digits);
            if !fixed.decimal {
                report.warnings.push(DefinitionWarning::ImpreciseInterval {
                    index,
                    interval: finest,
                });
            }

            // Modulo only visits multiples of the finest interval
            let step = fixed.to_fixed(finest);
            for (_, interval) in subsection.active_levels() {
                if step > 0 && fixed.to_fixed(interval) % step != 0 {
                    report
                        .warnings
                        .push(DefinitionWarning::IntervalNotMultipleOfFinest {
                            index,
                            interval,
                            finest,
                        });
                }
            }

            // Modulo levels ticks against zero, sweep against the subsection start
            let misaligned = subsection.active_levels().find(|(_, interval)| {
                let steps = start / interval;
                (steps - steps.round()).abs() > 1e-6
            });
            if let Some((_, interval)) = misaligned {
                report
                    .warnings
                    .push(DefinitionWarning::MisalignedSubsectionStart {
                        index,
                        start,
                        interval,
                    });
            }
        }
    }
}

impl fmt::Debug for ScaleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaleDefinition")
            .field("name", &self.name)
            .field("transform", &self.transform)
            .field("begin_value", &self.begin_value)
            .field("end_value", &self.end_value)
            .field("length_in_points", &self.length_in_points)
            .field("layout", &self.layout)
            .field("tick_direction", &self.tick_direction)
            .field("subsections", &self.subsections)
            .field("styles", &self.styles)
            .field("label_formatter", &self.label_formatter.is_some())
            .field("label_color", &self.label_color)
            .field("constants", &self.constants)
            .finish()
    }
}

/// A subsection's clamped domain span, in walk order
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Region {
    /// First value of the region (inclusive)
    pub from: f64,
    /// Last value of the region
    pub to: f64,
    /// Whether `to` itself belongs to the region
    pub closed: bool,
    /// `1.0` when walking up, `-1.0` when walking down
    pub direction: f64,
}

impl Region {
    /// Whether `value` has reached `from`, within `tolerance`
    pub fn has_started(&self, value: f64, tolerance: f64) -> bool {
        (value - self.from) * self.direction >= -tolerance
    }

    /// Whether `value` is still short of the end, honoring `closed`
    pub fn before_end(&self, value: f64, tolerance: f64) -> bool {
        let remaining = (self.to - value) * self.direction;
        if self.closed {
            remaining >= -tolerance
        } else {
            remaining > tolerance
        }
    }

    /// Whether the region is non-empty
    pub fn is_empty(&self) -> bool {
        (self.to - self.from) * self.direction < 0.0
    }
}

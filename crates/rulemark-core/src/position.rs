//! Position engine: value to normalized position and back
//!
//! One formula serves every layout:
//!
//! ```text
//! position(v) = (T(v) - T(begin)) / (T(end) - T(begin))
//! ```
//!
//! Circular layouts scale the position by 360 degrees for an angle, and by
//! the ring circumference for an arc length.

use std::f64::consts::PI;

use crate::definition::ScaleDefinition;

impl ScaleDefinition {
    /// Transform coordinates of the begin and end values
    fn coordinate_span(&self) -> (f64, f64) {
        let start = self.transform.forward(self.begin_value);
        let end = self.transform.forward(self.end_value);
        assert!(
            start.is_finite() && end.is_finite(),
            "transform '{}' of scale '{}' is not finite at its endpoints",
            self.transform,
            self.name
        );
        (start, end)
    }

    /// Normalized position of `value`: 0.0 at `begin_value`, 1.0 at `end_value`
    ///
    /// # Panics
    ///
    /// Panics if the transform is not finite at `value` or at either endpoint.
    pub fn normalized_position(&self, value: f64) -> f64 {
        let (start, end) = self.coordinate_span();
        let coordinate = self.transform.forward(value);
        assert!(
            coordinate.is_finite(),
            "transform '{}' of scale '{}' is not finite at {}",
            self.transform,
            self.name,
            value
        );
        // `+ 0.0` folds -0.0 into 0.0 on inverted scales
        (coordinate - start) / (end - start) + 0.0
    }

    /// Value at a normalized position
    pub fn value_at_position(&self, position: f64) -> f64 {
        let (start, end) = self.coordinate_span();
        self.transform.inverse(start + position * (end - start))
    }

    /// Distance from the scale start in points, along the scale
    pub fn distance_in_points(&self, value: f64) -> f64 {
        match self.layout.radius() {
            Some(_) => self.arc_length(value),
            None => self.normalized_position(value) * self.length_in_points,
        }
    }

    /// Angle of `value` in degrees on a circular scale
    ///
    /// # Panics
    ///
    /// Panics if the layout is not circular.
    pub fn angular_position(&self, value: f64) -> f64 {
        self.require_circular("angular_position");
        self.normalized_position(value) * 360.0
    }

    /// Value at an angle in degrees on a circular scale
    ///
    /// # Panics
    ///
    /// Panics if the layout is not circular.
    pub fn value_at_angle(&self, angle: f64) -> f64 {
        self.require_circular("value_at_angle");
        self.value_at_position(angle / 360.0)
    }

    /// Arc length from the scale start to `value`, in points
    ///
    /// # Panics
    ///
    /// Panics if the layout is not circular.
    pub fn arc_length(&self, value: f64) -> f64 {
        let radius = self.require_circular("arc_length");
        2.0 * PI * radius * (self.angular_position(value) / 360.0)
    }

    /// Whether `value` lies within the scale domain, endpoints included
    pub fn contains_value(&self, value: f64) -> bool {
        value >= self.domain_min() && value <= self.domain_max()
    }

    fn require_circular(&self, operation: &str) -> f64 {
        match self.layout.radius() {
            Some(radius) => radius,
            None => panic!(
                "{} called on scale '{}', which does not have a circular layout",
                operation, self.name
            ),
        }
    }
}

/// Domain-membership test
pub fn is_in_domain(definition: &ScaleDefinition, value: f64) -> bool {
    definition.contains_value(value)
}

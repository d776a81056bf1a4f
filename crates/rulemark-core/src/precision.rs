//! Cursor read-out precision
//!
//! How many decimals a digital cursor should show for a value depends on how
//! finely the scale is divided there: a region ticked every 0.02 can be read
//! to about three places, one ticked every unit to one.

use crate::definition::ScaleDefinition;
use crate::generated::GeneratedScale;

/// Decimals shown when no subsection applies
pub const FALLBACK_DECIMAL_PLACES: u32 = 2;

const MIN_DECIMAL_PLACES: u32 = 1;
const MAX_DECIMAL_PLACES: u32 = 5;

impl ScaleDefinition {
    /// Decimal places a cursor reading of `value` supports
    ///
    /// Derived from the finest interval of the subsection containing
    /// `value`: one digit past the interval's leading digit, between 1 and 5.
    pub fn cursor_decimal_places(&self, value: f64) -> u32 {
        let finest = self
            .subsection_index_for(value)
            .and_then(|index| self.subsections[index].finest_interval());

        match finest {
            None => FALLBACK_DECIMAL_PLACES,
            Some(interval) if interval >= 1.0 => MIN_DECIMAL_PLACES,
            Some(interval) => {
                let places = 1.0 - interval.log10().floor();
                (places as u32).clamp(MIN_DECIMAL_PLACES, MAX_DECIMAL_PLACES)
            }
        }
    }

    /// Format `value` the way a cursor would display it
    pub fn format_cursor_value(&self, value: f64) -> String {
        let places = self.cursor_decimal_places(value) as usize;
        format!("{:.*}", places, value)
    }
}

impl GeneratedScale {
    /// See [`ScaleDefinition::cursor_decimal_places`]
    pub fn cursor_decimal_places(&self, value: f64) -> u32 {
        self.definition().cursor_decimal_places(value)
    }

    /// See [`ScaleDefinition::format_cursor_value`]
    pub fn format_cursor_value(&self, value: f64) -> String {
        self.definition().format_cursor_value(value)
    }
}

//! Interval-sweep generator
//!
//! Each hierarchy level of each subsection is walked on its own, adding the
//! level's interval in floating point. Coincident ticks from different levels
//! are all emitted here and resolved by dedup.
//!
//! Float steps drift slightly, so this generator agrees with the modulo one
//! only while tick spacing stays clearly above the dedup threshold. At a
//! spacing equal to `min_separation` drifted gaps fall just short of it and
//! dedup drops ticks the modulo walk keeps.

use tracing::trace;

use super::{interval_tick, on_circular_seam};
use crate::definition::ScaleDefinition;
use crate::generated::TickMark;

/// Slack for region bound checks, relative to the interval
const STEP_TOLERANCE: f64 = 1e-9;

pub(super) fn sweep_ticks(definition: &ScaleDefinition) -> Vec<TickMark> {
    let direction = definition.direction();
    let mut ticks = Vec::new();

    for (index, subsection) in definition.subsections.iter().enumerate() {
        let region = definition.region(index);
        if region.is_empty() {
            continue;
        }

        for (level, interval) in subsection.active_levels() {
            let tolerance = interval * STEP_TOLERANCE;

            // Skip whole steps from the subsection start up to the clamped start
            let lead = (region.from - subsection.start_value) * direction / interval;
            let skipped = (lead - STEP_TOLERANCE).ceil().max(0.0);
            let mut value = subsection.start_value + direction * skipped * interval;
            let mut emitted = 0usize;

            while region.before_end(value, tolerance) {
                if region.has_started(value, tolerance) {
                    // Snap drifted values back onto the region bounds
                    let snapped = if (value - region.from).abs() <= tolerance {
                        region.from
                    } else if (value - region.to).abs() <= tolerance {
                        region.to
                    } else {
                        value
                    };
                    let position = definition.normalized_position(snapped);
                    if !on_circular_seam(definition, position) {
                        ticks.push(interval_tick(definition, index, snapped, position, level));
                        emitted += 1;
                    }
                }
                value += direction * interval;
            }

            trace!(
                scale = %definition.name,
                subsection = index,
                level,
                interval,
                emitted,
                "swept level"
            );
        }
    }

    ticks
}

//! Exact-modulo generator
//!
//! Every subsection is walked once, in fixed-point integers, at its finest
//! interval. A step's hierarchy level is the coarsest interval that divides
//! its integer coordinate, so a value that is both a major and a minor
//! multiple is only ever emitted as major.

use tracing::trace;

use super::multiplier::{fixed_point_multiplier, FixedPoint};
use super::{interval_tick, on_circular_seam};
use crate::config::GenerationConfig;
use crate::definition::ScaleDefinition;
use crate::generated::TickMark;

pub(super) fn modulo_ticks(definition: &ScaleDefinition, config: &GenerationConfig) -> Vec<TickMark> {
    let sign: i64 = if definition.is_inverted() { -1 } else { 1 };
    let mut ticks = Vec::new();

    for (index, subsection) in definition.subsections.iter().enumerate() {
        let Some(finest) = subsection.finest_interval() else {
            panic!(
                "subsection {} of scale '{}' has no positive tick interval",
                index, definition.name
            );
        };

        let region = definition.region(index);
        if region.is_empty() {
            continue;
        }

        let fixed = fixed_point_multiplier(&subsection.tick_intervals, config.max_decimal_digits);
        let step = fixed.to_fixed(finest);
        assert!(
            step > 0,
            "interval {} of scale '{}' vanishes at multiplier {}",
            finest,
            definition.name,
            fixed.multiplier
        );

        let levels: Vec<(usize, i64)> = subsection
            .active_levels()
            .map(|(level, interval)| (level, fixed.to_fixed(interval)))
            .filter(|(_, scaled)| *scaled > 0)
            .collect();

        let (from, _) = to_fixed_inward(fixed, region.from, sign);
        let (to, nudged) = to_fixed_inward(fixed, region.to, -sign);
        // A bound that fell between grid points cannot be hit exactly
        let closed = region.closed || nudged;

        let mut current = align(from, step, sign);
        let mut emitted = 0usize;

        loop {
            let remaining = (to - current) * sign;
            if remaining < 0 || (remaining == 0 && !closed) {
                break;
            }

            let value = fixed.to_value(current);
            let position = definition.normalized_position(value);
            if !on_circular_seam(definition, position) {
                let level = classify(current, &levels);
                ticks.push(interval_tick(definition, index, value, position, level));
                emitted += 1;
            }
            current += sign * step;
        }

        trace!(
            scale = %definition.name,
            subsection = index,
            multiplier = fixed.multiplier,
            step,
            emitted,
            "walked subsection"
        );
    }

    ticks
}

/// Coarsest level whose interval divides `coordinate`
fn classify(coordinate: i64, levels: &[(usize, i64)]) -> usize {
    levels
        .iter()
        .find(|(_, interval)| coordinate % interval == 0)
        .or(levels.last())
        .map_or(0, |(level, _)| *level)
}

/// First multiple of `step` at or past `value` in the walk direction
fn align(value: i64, step: i64, sign: i64) -> i64 {
    let remainder = value.rem_euclid(step);
    if remainder == 0 {
        value
    } else if sign > 0 {
        value - remainder + step
    } else {
        value - remainder
    }
}

/// Round to fixed point, nudging one unit `inward` if rounding crossed `value`
///
/// Returns the coordinate and whether it was nudged.
fn to_fixed_inward(fixed: FixedPoint, value: f64, inward: i64) -> (i64, bool) {
    let scaled = fixed.to_fixed(value);
    let slack = 1e-9 * value.abs().max(1.0);
    let behind = (value - fixed.to_value(scaled)) * inward as f64;
    if behind > slack {
        (scaled + inward, true)
    } else {
        (scaled, false)
    }
}

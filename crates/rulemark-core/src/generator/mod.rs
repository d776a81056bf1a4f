//! Tick generation
//!
//! Turns a [`ScaleDefinition`] into a [`GeneratedScale`]. Two generators are
//! available, selected per call through [`GenerationConfig::mode`]:
//!
//! - **Sweep**: walks each hierarchy level separately in float steps and
//!   leaves overlaps (a major tick that is also a minor multiple) to dedup.
//! - **Modulo**: walks the finest interval once in fixed-point integers and
//!   levels each step by the coarsest interval that divides it exactly.
//!
//! Both produce the same ticks for well-formed definitions. Constant markers
//! bypass the subsections entirely and are merged just before dedup.

pub(crate) mod dedup;
pub mod multiplier;
mod modulo;
mod sweep;

use tracing::{debug, trace};

use crate::config::{GenerationConfig, GenerationMode};
use crate::definition::ScaleDefinition;
use crate::error::ScaleResult;
use crate::generated::{GeneratedScale, TickMark};

/// Positions this close to 1.0 coincide with the circular seam
const SEAM_TOLERANCE: f64 = 1e-9;

/// Generate ticks for a definition that has already been validated
///
/// # Panics
///
/// Panics if a subsection has no positive interval in modulo mode, or if the
/// transform is not finite somewhere on the domain.
pub fn generate(definition: &ScaleDefinition, config: &GenerationConfig) -> GeneratedScale {
    let mut ticks = match config.mode {
        GenerationMode::Sweep => sweep::sweep_ticks(definition),
        GenerationMode::Modulo => modulo::modulo_ticks(definition, config),
    };
    let interval_ticks = ticks.len();

    ticks.extend(constant_ticks(definition));
    ticks.sort_by(|a, b| a.normalized_position.total_cmp(&b.normalized_position));

    let emitted = ticks.len();
    let ticks = dedup::deduplicate(
        ticks,
        config.min_separation,
        definition.layout.is_circular(),
    );

    debug!(
        scale = %definition.name,
        mode = ?config.mode,
        interval_ticks,
        ticks = ticks.len(),
        merged = emitted - ticks.len(),
        "generated scale"
    );

    GeneratedScale::new(definition.clone(), ticks)
}

/// Validate the definition and config, then generate
pub fn try_generate(
    definition: &ScaleDefinition,
    config: &GenerationConfig,
) -> ScaleResult<GeneratedScale> {
    config.validate()?;
    definition
        .validate_with(config)
        .into_result(&definition.name)?;
    Ok(generate(definition, config))
}

/// Build one interval tick, applying style and label rules
pub(crate) fn interval_tick(
    definition: &ScaleDefinition,
    subsection_index: usize,
    value: f64,
    position: f64,
    level: usize,
) -> TickMark {
    let style = definition.style_for_level(level);
    let labeled = style.should_label
        || definition.subsections[subsection_index]
            .label_levels
            .contains(&level);

    TickMark {
        value,
        normalized_position: position,
        angular_position: angle_for(definition, position),
        level: Some(level),
        style,
        label: labeled.then(|| definition.format_label(subsection_index, value)),
    }
}

/// Whether a tick at `position` would sit on the 0°/360° seam
///
/// A circular scale always closes the loop, so its end value lands on top of
/// its begin value.
pub(crate) fn on_circular_seam(definition: &ScaleDefinition, position: f64) -> bool {
    let seam = definition.layout.is_circular() && (position - 1.0).abs() < SEAM_TOLERANCE;
    if seam {
        trace!(scale = %definition.name, "suppressed tick on circular seam");
    }
    seam
}

fn angle_for(definition: &ScaleDefinition, position: f64) -> Option<f64> {
    definition
        .layout
        .is_circular()
        .then_some(position * 360.0)
}

/// Ticks for the constant markers that fall inside the domain
fn constant_ticks(definition: &ScaleDefinition) -> Vec<TickMark> {
    definition
        .constants
        .iter()
        .filter(|marker| definition.contains_value(marker.value))
        .map(|marker| {
            let position = definition.normalized_position(marker.value);
            TickMark {
                value: marker.value,
                normalized_position: position,
                angular_position: angle_for(definition, position),
                level: None,
                style: marker.style,
                label: marker.label.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{ConstantMarker, Subsection};
    use crate::error::ScaleError;
    use crate::style::TickStyle;
    use crate::transform::Transform;

    fn c_scale() -> ScaleDefinition {
        ScaleDefinition::new("C", Transform::Log, 1.0, 10.0)
            .with_subsection(Subsection::new(1.0, [1.0, 0.5, 0.1]).with_label_levels([0]))
    }

    #[test]
    fn test_constants_are_merged() {
        let scale = c_scale().with_constant(
            ConstantMarker::new(std::f64::consts::PI)
                .with_label("π")
                .with_style(TickStyle::MEDIUM),
        );
        let generated = generate(&scale, &GenerationConfig::default());
        let pi = generated
            .ticks()
            .iter()
            .find(|t| t.is_constant())
            .expect("π marker");
        assert_eq!(pi.label.as_deref(), Some("π"));
        assert!(generated
            .ticks()
            .windows(2)
            .all(|w| w[0].normalized_position <= w[1].normalized_position));
    }

    #[test]
    fn test_constant_outside_domain_is_skipped() {
        let scale = c_scale().with_constant(ConstantMarker::new(20.0).with_label("∞"));
        let generated = generate(&scale, &GenerationConfig::default());
        assert!(generated.ticks().iter().all(|t| !t.is_constant()));
    }

    #[test]
    fn test_constant_wins_over_lighter_tick() {
        // 1.1 is also a level 2 tick; the major-weight marker replaces it
        let scale = c_scale().with_constant(ConstantMarker::new(1.1).with_label("k"));
        let generated = generate(&scale, &GenerationConfig::default());
        let at = generated
            .ticks()
            .iter()
            .find(|t| (t.value - 1.1).abs() < 1e-9)
            .unwrap();
        assert!(at.is_constant());
        assert_eq!(at.label.as_deref(), Some("k"));
    }

    #[test]
    fn test_try_generate_rejects_invalid() {
        let broken = ScaleDefinition::new("X", Transform::Log, 1.0, 1.0);
        let result = try_generate(&broken, &GenerationConfig::default());
        match result {
            Err(ScaleError::InvalidDefinition { name, errors }) => {
                assert_eq!(name, "X");
                assert!(errors.len() >= 2);
            }
            other => panic!("expected InvalidDefinition, got {:?}", other.map(|g| g.len())),
        }
    }

    #[test]
    fn test_try_generate_rejects_bad_config() {
        let config = GenerationConfig::new().with_min_separation(-1.0);
        assert!(matches!(
            try_generate(&c_scale(), &config),
            Err(ScaleError::Config(_))
        ));
    }

    #[test]
    fn test_circular_ticks_have_angles() {
        let scale = c_scale().circular(300.0, 120.0);
        let generated = generate(&scale, &GenerationConfig::default());
        assert!(generated
            .ticks()
            .iter()
            .all(|t| t.angular_position == Some(t.normalized_position * 360.0)));
    }
}

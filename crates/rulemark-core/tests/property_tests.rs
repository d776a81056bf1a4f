//! Property-based tests for the position engine and tick generation

mod common;

use proptest::prelude::*;
use rulemark_core::{
    generate, GenerationConfig, GenerationMode, ScaleDefinition, Subsection, Transform,
};

fn hierarchy() -> impl Strategy<Value = Vec<f64>> {
    prop_oneof![
        Just(vec![1.0, 0.5, 0.1]),
        Just(vec![1.0, 0.2]),
        Just(vec![5.0, 1.0, 0.25]),
        Just(vec![1.0, 0.1, 0.05, 0.01]),
    ]
}

fn mode() -> impl Strategy<Value = GenerationMode> {
    prop_oneof![Just(GenerationMode::Sweep), Just(GenerationMode::Modulo)]
}

proptest! {
    #[test]
    fn test_log_positions_are_monotonic(a in 1.0f64..10.0, b in 1.0f64..10.0) {
        prop_assume!(b - a > 1e-9);
        let scale = common::c_scale();
        prop_assert!(scale.normalized_position(a) < scale.normalized_position(b));
    }

    #[test]
    fn test_inverted_positions_reverse(a in 1.0f64..10.0, b in 1.0f64..10.0) {
        prop_assume!(b - a > 1e-9);
        let scale = common::ci_scale();
        prop_assert!(scale.normalized_position(a) > scale.normalized_position(b));
    }

    #[test]
    fn test_position_round_trip(value in 1.0f64..100.0) {
        let scale = common::a_scale();
        let back = scale.value_at_position(scale.normalized_position(value));
        prop_assert!((back - value).abs() / value < 1e-9, "{} came back as {}", value, back);
    }

    #[test]
    fn test_positions_stay_in_unit_range(
        begin in 0u32..20,
        span in 1u32..40,
        intervals in hierarchy(),
        mode in mode(),
    ) {
        let begin = begin as f64;
        let scale = ScaleDefinition::new("L", Transform::Linear, begin, begin + span as f64)
            .with_subsection(Subsection::new(begin, intervals));
        let generated = generate(&scale, &GenerationConfig::new().with_mode(mode));

        prop_assert!(!generated.is_empty());
        for tick in generated.ticks() {
            prop_assert!((0.0..=1.0).contains(&tick.normalized_position));
        }
    }

    #[test]
    fn test_adjacent_ticks_respect_min_separation(
        decades in 1u32..3,
        intervals in hierarchy(),
        mode in mode(),
    ) {
        let end = 10f64.powi(decades as i32);
        let scale = ScaleDefinition::new("D", Transform::Log, 1.0, end)
            .with_subsection(Subsection::new(1.0, intervals));
        let config = GenerationConfig::new().with_mode(mode);
        let generated = generate(&scale, &config);

        for pair in generated.ticks().windows(2) {
            let gap = pair[1].normalized_position - pair[0].normalized_position;
            prop_assert!(
                gap >= config.min_separation,
                "{} and {} are {} apart",
                pair[0].value,
                pair[1].value,
                gap
            );
        }
    }

    #[test]
    fn test_nearest_tick_is_nearest(position in 0.0f64..=1.0) {
        let generated = generate(&common::c_scale(), &GenerationConfig::default());
        let nearest = generated.nearest_tick(position).unwrap();
        let best = (nearest.normalized_position - position).abs();
        prop_assert!(generated
            .ticks()
            .iter()
            .all(|t| (t.normalized_position - position).abs() >= best));
    }
}

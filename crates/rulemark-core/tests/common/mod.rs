//! Shared scale fixtures

use rulemark_core::{
    ConstantMarker, GeneratedScale, ScaleDefinition, Subsection, TickStyle, Transform,
};

/// Route generator logs to the test harness; honors `RUST_LOG`
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Classic C scale: three density regions
pub fn c_scale() -> ScaleDefinition {
    ScaleDefinition::new("C", Transform::Log, 1.0, 10.0).with_subsections([
        Subsection::new(1.0, [1.0, 0.1, 0.05, 0.01]).with_label_levels([0, 1]),
        Subsection::new(2.0, [1.0, 0.5, 0.1, 0.02]),
        Subsection::new(4.0, [1.0, 0.5, 0.1, 0.05]),
    ])
}

/// Inverted C scale, walked from 10 down to 1
#[allow(dead_code)]
pub fn ci_scale() -> ScaleDefinition {
    ScaleDefinition::new("CI", Transform::ReciprocalLog, 10.0, 1.0).with_subsections([
        Subsection::new(10.0, [1.0, 0.5, 0.1]),
        Subsection::new(4.0, [1.0, 0.5, 0.1, 0.05]),
        Subsection::new(2.0, [1.0, 0.1, 0.05, 0.01]),
    ])
}

/// Two-decade A scale
#[allow(dead_code)]
pub fn a_scale() -> ScaleDefinition {
    ScaleDefinition::new("A", Transform::HalfLog, 1.0, 100.0)
        .with_subsections([
            Subsection::new(1.0, [1.0, 0.5, 0.1]),
            Subsection::new(10.0, [10.0, 5.0, 1.0]),
        ])
        .with_constant(ConstantMarker::new(std::f64::consts::PI).with_label("π"))
}

/// Full-turn degree dial on a circular rule
#[allow(dead_code)]
pub fn degree_dial() -> ScaleDefinition {
    ScaleDefinition::new("Deg", Transform::Linear, 0.0, 360.0)
        .circular(288.0, 120.0)
        .with_subsection(Subsection::new(0.0, [10.0, 5.0, 1.0]))
}

/// Linear scale divided in thirds, exercising the rational multiplier
#[allow(dead_code)]
pub fn thirds_scale() -> ScaleDefinition {
    ScaleDefinition::new("T", Transform::Linear, 0.0, 2.0)
        .with_subsection(Subsection::new(0.0, [1.0, 1.0 / 3.0]).with_label_levels([0]))
        .with_constant(ConstantMarker::new(1.5).with_style(TickStyle::MINOR))
}

/// (value, level, label) per tick, in position order
#[allow(dead_code)]
pub fn triples(scale: &GeneratedScale) -> Vec<(f64, Option<usize>, Option<String>)> {
    scale
        .ticks()
        .iter()
        .map(|t| (t.value, t.level, t.label.clone()))
        .collect()
}

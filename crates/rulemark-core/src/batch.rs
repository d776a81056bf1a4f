//! Generating many scales at once
//!
//! Scales are independent, so with the `parallel` feature each one is
//! generated on the rayon pool. Results always come back in input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::config::GenerationConfig;
use crate::definition::ScaleDefinition;
use crate::error::ScaleResult;
use crate::generated::GeneratedScale;
use crate::generator::{generate, try_generate};

/// Generate every definition, in input order
///
/// # Panics
///
/// Panics under the same conditions as [`generate`].
pub fn generate_all(definitions: &[ScaleDefinition], config: &GenerationConfig) -> Vec<GeneratedScale> {
    debug!(scales = definitions.len(), "generating batch");

    #[cfg(feature = "parallel")]
    let generated = definitions
        .par_iter()
        .map(|definition| generate(definition, config))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let generated = definitions
        .iter()
        .map(|definition| generate(definition, config))
        .collect();

    generated
}

/// Validate and generate every definition, in input order
///
/// A failing definition yields its error in place without affecting the
/// others.
pub fn try_generate_all(
    definitions: &[ScaleDefinition],
    config: &GenerationConfig,
) -> Vec<ScaleResult<GeneratedScale>> {
    debug!(scales = definitions.len(), "validating and generating batch");

    #[cfg(feature = "parallel")]
    let results = definitions
        .par_iter()
        .map(|definition| try_generate(definition, config))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results = definitions
        .iter()
        .map(|definition| try_generate(definition, config))
        .collect();

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::Subsection;
    use crate::error::ScaleError;
    use crate::transform::Transform;

    fn scales() -> Vec<ScaleDefinition> {
        vec![
            ScaleDefinition::new("C", Transform::Log, 1.0, 10.0)
                .with_subsection(Subsection::new(1.0, [1.0, 0.5, 0.1])),
            ScaleDefinition::new("A", Transform::HalfLog, 1.0, 100.0)
                .with_subsections([Subsection::new(1.0, [1.0, 0.5]), Subsection::new(10.0, [10.0, 5.0])]),
            ScaleDefinition::new("L", Transform::Linear, 0.0, 1.0)
                .with_subsection(Subsection::new(0.0, [0.1, 0.05, 0.01])),
        ]
    }

    #[test]
    fn test_order_matches_input() {
        let generated = generate_all(&scales(), &GenerationConfig::default());
        let names: Vec<&str> = generated.iter().map(|g| g.name()).collect();
        assert_eq!(names, vec!["C", "A", "L"]);
    }

    #[test]
    fn test_batch_matches_single() {
        let config = GenerationConfig::default();
        let definitions = scales();
        let batch = generate_all(&definitions, &config);
        for (definition, generated) in definitions.iter().zip(&batch) {
            assert_eq!(generate(definition, &config).ticks(), generated.ticks());
        }
    }

    #[test]
    fn test_errors_stay_in_place() {
        let mut definitions = scales();
        definitions.insert(1, ScaleDefinition::new("Broken", Transform::Log, 2.0, 2.0));
        let results = try_generate_all(&definitions, &GenerationConfig::default());
        assert_eq!(results.len(), 4);
        assert!(results[0].is_ok());
        assert!(matches!(
            &results[1],
            Err(ScaleError::InvalidDefinition { name, .. }) if name == "Broken"
        ));
        assert!(results[2].is_ok() && results[3].is_ok());
    }
}

use tracing::debug;

use crate::aggregate::aggregate;
use crate::config::{EngineConfig, RulesDocument, VariableDocument};
use crate::defuzz::mean_of_maxima;
use crate::error::FuzzyResult;
use crate::rules::RuleBase;
use crate::variable::LinguisticVariable;

/// Mamdani inference pipeline: fuzzify, activate rules, aggregate,
/// defuzzify.
///
/// Holds nothing but its settings. Every call computes from scratch over
/// read-only configuration, so one engine may serve any number of concurrent
/// calls without coordination.
#[derive(Clone, Copy, Debug, Default)]
pub struct InferenceEngine {
    config: EngineConfig,
}

impl InferenceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        InferenceEngine { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs one inference, producing a crisp output for a crisp input.
    ///
    /// Always returns a real number: anomalies short of an unparseable
    /// configuration degrade to well-defined defaults instead of failing.
    pub fn infer(
        &self,
        value: f64,
        input: &LinguisticVariable,
        output: &LinguisticVariable,
        rules: &RuleBase,
    ) -> f64 {
        let input_activations = input.activate(value);

        debug!(input = value, activations = ?input_activations, "fuzzified input");

        let rule_activations = rules.activations(&input_activations);
        let curve = aggregate(&rule_activations, rules, output, &self.config);
        let crisp = mean_of_maxima(&curve);

        debug!(output = crisp, "defuzzified aggregated curve");

        crisp
    }
}

/// Parses the three configuration documents and runs a single inference with
/// default engine settings.
///
/// Each variable document is expected to hold one variable; its first entry
/// is used.
pub fn run(
    input_document: &str,
    output_document: &str,
    rules_document: &str,
    value: f64,
) -> FuzzyResult<f64> {
    let input = VariableDocument::from_json(input_document)?.into_variable()?;
    let output = VariableDocument::from_json(output_document)?.into_variable()?;
    let rules = RulesDocument::from_json(rules_document)?.into_rule_base();

    Ok(InferenceEngine::new().infer(value, &input, &output, &rules))
}

#[test]
fn test_temperature_control() {
    use approx::assert_relative_eq;

    use crate::variable::Term;

    let temperature = LinguisticVariable::new(
        "temperature",
        vec![
            Term::new("cold", vec![(0., 1.), (15., 1.), (25., 0.)]),
            Term::new("warm", vec![(15., 0.), (25., 1.), (35., 1.)]),
        ],
    )
    .unwrap();
    let heating = LinguisticVariable::new(
        "heating",
        vec![
            Term::new("off", vec![(0., 1.), (5., 0.)]),
            Term::new("on", vec![(5., 0.), (10., 1.)]),
        ],
    )
    .unwrap();

    let mut rules = RuleBase::new();
    rules.add("cold", "off");
    rules.add("warm", "on");

    let engine = InferenceEngine::new();

    // cold dominates at 19 degrees, so the clipped "off" plateau [0, 2] wins
    let crisp = engine.infer(19., &temperature, &heating, &rules);
    assert_relative_eq!(crisp, 1., epsilon = 1e-6);

    // warm dominates at 22 degrees, plateau [8.5, 10]
    let crisp = engine.infer(22., &temperature, &heating, &rules);
    assert_relative_eq!(crisp, 9.25, epsilon = 1e-6);
}

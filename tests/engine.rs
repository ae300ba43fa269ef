//! End-to-end inference scenarios over the temperature/heating system.

use approx::assert_relative_eq;
use fuzzy_control::{
    aggregate, run, EngineConfig, FuzzyError, InferenceEngine, LinguisticVariable, RuleBase, Term,
};

fn temperature() -> LinguisticVariable {
    LinguisticVariable::new(
        "temperature",
        vec![
            Term::new("cold", vec![(0., 1.), (15., 1.), (25., 0.)]),
            Term::new("warm", vec![(15., 0.), (25., 1.), (35., 1.)]),
        ],
    )
    .unwrap()
}

fn heating() -> LinguisticVariable {
    LinguisticVariable::new(
        "heating",
        vec![
            Term::new("off", vec![(0., 1.), (5., 0.)]),
            Term::new("on", vec![(5., 0.), (10., 1.)]),
        ],
    )
    .unwrap()
}

fn heating_rules() -> RuleBase {
    let mut rules = RuleBase::new();
    rules.add("cold", "off");
    rules.add("warm", "on");
    rules
}

#[test]
fn cold_dominant_input_lands_on_the_off_plateau() {
    // at 19 degrees cold activates at 0.6 and warm at 0.4, so the clipped
    // "off" plateau [0, 2] carries the maximum
    let crisp = InferenceEngine::new().infer(19., &temperature(), &heating(), &heating_rules());

    assert_relative_eq!(crisp, 1., epsilon = 1e-6);
}

#[test]
fn warm_dominant_input_lands_between_5_and_10() {
    let crisp = InferenceEngine::new().infer(22., &temperature(), &heating(), &heating_rules());

    assert!(crisp > 5. && crisp < 10.);
    assert_relative_eq!(crisp, 9.25, epsilon = 1e-6);
}

#[test]
fn output_grows_with_warm_activation() {
    let engine = InferenceEngine::new();
    let at_22 = engine.infer(22., &temperature(), &heating(), &heating_rules());
    let at_24 = engine.infer(24., &temperature(), &heating(), &heating_rules());

    assert!(at_24 > at_22);
    assert!(at_24 < 10.);
}

#[test]
fn inactive_rules_defuzzify_to_zero() {
    // cold holds zero membership at 30 degrees, so its lone rule never fires
    let mut rules = RuleBase::new();
    rules.add("cold", "on");

    let crisp = InferenceEngine::new().infer(30., &temperature(), &heating(), &rules);

    assert_eq!(crisp, 0.);
}

#[test]
fn unknown_antecedent_never_fires() {
    let mut rules = heating_rules();
    rules.add("scorching", "on");

    let with_extra = InferenceEngine::new().infer(19., &temperature(), &heating(), &rules);
    let without = InferenceEngine::new().infer(19., &temperature(), &heating(), &heating_rules());

    assert_eq!(with_extra, without);
}

#[test]
fn unknown_consequent_is_skipped() {
    let mut rules = RuleBase::new();
    rules.add("cold", "blast");
    rules.add("warm", "on");

    // only the warm rule contributes: "on" clipped at 0.4, plateau [7, 10]
    let crisp = InferenceEngine::new().infer(19., &temperature(), &heating(), &rules);

    assert_relative_eq!(crisp, 8.5, epsilon = 1e-6);
}

#[test]
fn strict_validation_reports_unmatched_rule_ids() {
    let mut rules = heating_rules();
    rules.add("scorching", "on");

    let err = rules.validate(&temperature(), &heating()).unwrap_err();

    assert!(matches!(err, FuzzyError::UnknownAntecedent { index: 2, .. }));
}

#[test]
fn empty_output_variable_falls_back_to_default_domain() {
    let empty = LinguisticVariable::new("heating", vec![]).unwrap();

    let crisp = InferenceEngine::new().infer(19., &temperature(), &empty, &heating_rules());
    assert_eq!(crisp, 0.);

    let curve = aggregate(&[0.6, 0.4], &heating_rules(), &empty, &EngineConfig::default());
    assert_eq!(curve.samples().first(), Some(&0.));
    assert_relative_eq!(*curve.samples().last().unwrap(), 10., epsilon = 1e-9);
}

#[test]
fn degenerate_output_terms_defuzzify_to_zero() {
    let stub = LinguisticVariable::new("heating", vec![Term::new("on", vec![(5., 1.)])]).unwrap();

    let crisp = InferenceEngine::new().infer(19., &temperature(), &stub, &heating_rules());

    assert_eq!(crisp, 0.);
}

#[test]
fn resolution_increase_moves_output_less_than_one_grid_spacing() {
    let coarse = InferenceEngine::with_config(EngineConfig {
        steps: 101,
        ..Default::default()
    })
    .infer(22., &temperature(), &heating(), &heating_rules());
    let fine = InferenceEngine::with_config(EngineConfig {
        steps: 1001,
        ..Default::default()
    })
    .infer(22., &temperature(), &heating(), &heating_rules());

    // coarse grid spacing over the [0, 10] heating domain
    assert!((coarse - fine).abs() < 10. / 100.);
}

#[test]
fn resolution_convergence_holds_at_finer_grids() {
    let mid = InferenceEngine::with_config(EngineConfig {
        steps: 1001,
        ..Default::default()
    })
    .infer(19., &temperature(), &heating(), &heating_rules());
    let fine = InferenceEngine::with_config(EngineConfig {
        steps: 5001,
        ..Default::default()
    })
    .infer(19., &temperature(), &heating(), &heating_rules());

    assert!((mid - fine).abs() < 10. / 1000.);
}

#[test]
fn inference_is_idempotent() {
    let engine = InferenceEngine::new();
    let first = engine.infer(19., &temperature(), &heating(), &heating_rules());
    let second = engine.infer(19., &temperature(), &heating(), &heating_rules());

    assert_eq!(first.to_bits(), second.to_bits());
}

const INPUT_DOC: &str = r#"{
    "temperature": [
        {"id": "cold", "points": [[0, 1], [15, 1], [25, 0]]},
        {"id": "warm", "points": [[15, 0], [25, 1], [35, 1]]}
    ]
}"#;

const OUTPUT_DOC: &str = r#"{
    "heating": [
        {"id": "off", "points": [[0, 1], [5, 0]]},
        {"id": "on", "points": [[5, 0], [10, 1]]}
    ]
}"#;

const RULES_DOC: &str = r#"[["cold", "off"], ["warm", "on"]]"#;

#[test]
fn run_parses_documents_and_infers() {
    let crisp = run(INPUT_DOC, OUTPUT_DOC, RULES_DOC, 19.).unwrap();

    assert_relative_eq!(crisp, 1., epsilon = 1e-6);
}

#[test]
fn run_matches_the_assembled_engine() {
    let from_documents = run(INPUT_DOC, OUTPUT_DOC, RULES_DOC, 22.).unwrap();
    let assembled = InferenceEngine::new().infer(22., &temperature(), &heating(), &heating_rules());

    assert_eq!(from_documents.to_bits(), assembled.to_bits());
}

#[test]
fn run_rejects_malformed_documents() {
    let err = run("not json", OUTPUT_DOC, RULES_DOC, 19.).unwrap_err();

    assert!(matches!(err, FuzzyError::MalformedDocument(_)));
}

#[test]
fn run_rejects_empty_variable_documents() {
    let err = run("{}", OUTPUT_DOC, RULES_DOC, 19.).unwrap_err();

    assert!(matches!(err, FuzzyError::EmptyDocument));
}

//! Mamdani-style fuzzy inference over piecewise-linear membership functions.
//!
//! A crisp input is fuzzified against an input [`LinguisticVariable`], the
//! resulting term activations drive a [`RuleBase`], every firing rule's
//! consequent is clipped and unioned across a sampled output domain, and the
//! aggregated curve collapses to one crisp output by mean of maxima.
//!
//! Configuration is immutable once loaded and every call computes from
//! scratch, so inference is a pure function of its inputs and may run
//! concurrently over shared variables and rules.
//!
//! ```
//! use fuzzy_control::{FuzzyError, InferenceEngine, LinguisticVariable, RuleBase, Term};
//!
//! let temperature = LinguisticVariable::new(
//!     "temperature",
//!     vec![
//!         Term::new("cold", vec![(0.0, 1.0), (15.0, 1.0), (25.0, 0.0)]),
//!         Term::new("warm", vec![(15.0, 0.0), (25.0, 1.0), (35.0, 1.0)]),
//!     ],
//! )?;
//! let heating = LinguisticVariable::new(
//!     "heating",
//!     vec![
//!         Term::new("off", vec![(0.0, 1.0), (5.0, 0.0)]),
//!         Term::new("on", vec![(5.0, 0.0), (10.0, 1.0)]),
//!     ],
//! )?;
//!
//! let mut rules = RuleBase::new();
//! rules.add("cold", "off");
//! rules.add("warm", "on");
//!
//! let crisp = InferenceEngine::new().infer(19.0, &temperature, &heating, &rules);
//! assert!((0.0..=10.0).contains(&crisp));
//! # Ok::<(), FuzzyError>(())
//! ```

mod aggregate;
mod config;
mod defuzz;
mod error;
mod inference;
mod linspace;
mod math;
mod rules;
mod variable;

pub use aggregate::{aggregate, SampledCurve};
pub use config::{
    EngineConfig, RulesDocument, VariableDocument, DEFAULT_FALLBACK_DOMAIN, DEFAULT_STEPS,
};
pub use defuzz::mean_of_maxima;
pub use error::{FuzzyError, FuzzyResult};
pub use inference::{run, InferenceEngine};
pub use math::membership;
pub use rules::{Rule, RuleBase};
pub use variable::{LinguisticVariable, Term};

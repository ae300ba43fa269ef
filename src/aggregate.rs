use tracing::{debug, trace, warn};

use crate::config::EngineConfig;
use crate::linspace::Linspace;
use crate::rules::RuleBase;
use crate::variable::LinguisticVariable;

/// Aggregated output membership over a sampled slice of the output domain.
///
/// Transient: rebuilt on every inference call and discarded once
/// defuzzified. Holds one membership value per sample.
#[derive(Clone, Debug, Default)]
pub struct SampledCurve {
    samples: Vec<f64>,
    memberships: Vec<f64>,
}

impl SampledCurve {
    fn zeroed(samples: Vec<f64>) -> Self {
        let memberships = vec![0.; samples.len()];

        SampledCurve {
            samples,
            memberships,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(samples: Vec<f64>, memberships: Vec<f64>) -> Self {
        debug_assert_eq!(samples.len(), memberships.len());

        SampledCurve {
            samples,
            memberships,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn memberships(&self) -> &[f64] {
        &self.memberships
    }

    /// Iterates `(sample_x, membership_y)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples
            .iter()
            .copied()
            .zip(self.memberships.iter().copied())
    }
}

/// Unions every firing rule's clipped consequent membership into one curve.
///
/// Standard max-min composition: each consequent curve is clipped (min) at
/// its rule's activation degree, then folded into the aggregate pointwise
/// (max). A rule with zero activation or a consequent matching no output
/// term contributes nothing; a single bad rule never aborts the inference.
///
/// The sample grid spans the output variable's knots, or the configured
/// fallback domain when the variable has no terms.
pub fn aggregate(
    activations: &[f64],
    rules: &RuleBase,
    output: &LinguisticVariable,
    config: &EngineConfig,
) -> SampledCurve {
    let (min_x, max_x) = output.bounds().unwrap_or(config.fallback_domain);

    debug!(min_x, max_x, steps = config.steps, "sampling output domain");

    let mut curve = SampledCurve::zeroed(Linspace::new(min_x, max_x, config.steps).collect());

    for (rule, &activation) in rules.iter().zip(activations) {
        if activation == 0. {
            continue;
        }

        let Some(term) = output.term(rule.consequent()) else {
            warn!(
                consequent = rule.consequent(),
                "rule consequent matches no output term, skipping"
            );
            continue;
        };

        trace!(
            consequent = rule.consequent(),
            activation,
            "folding rule contribution"
        );

        for i in 0..curve.samples.len() {
            let clipped = f64::min(activation, term.membership(curve.samples[i]));

            curve.memberships[i] = f64::max(curve.memberships[i], clipped);
        }
    }

    curve
}

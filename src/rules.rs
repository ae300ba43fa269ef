use indexmap::IndexMap;

use crate::error::{FuzzyError, FuzzyResult};
use crate::variable::LinguisticVariable;

/// One implication: if the input is `antecedent`, the output is `consequent`.
///
/// References terms by id across the input and output variables; a pure
/// lookup relation with no ownership of either side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    antecedent: String,
    consequent: String,
}

impl Rule {
    pub fn new(antecedent: impl Into<String>, consequent: impl Into<String>) -> Self {
        Rule {
            antecedent: antecedent.into(),
            consequent: consequent.into(),
        }
    }

    pub fn antecedent(&self) -> &str {
        &self.antecedent
    }

    pub fn consequent(&self) -> &str {
        &self.consequent
    }
}

/// An ordered list of rules linking input terms to output terms.
#[derive(Clone, Debug, Default)]
pub struct RuleBase(Vec<Rule>);

impl RuleBase {
    pub fn new() -> Self {
        RuleBase(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        RuleBase(Vec::with_capacity(capacity))
    }

    pub fn add(&mut self, antecedent: impl Into<String>, consequent: impl Into<String>) {
        self.0.push(Rule::new(antecedent, consequent));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.0.iter()
    }

    /// One activation scalar per rule, in rule order.
    ///
    /// An antecedent id absent from the activation map contributes 0.0: the
    /// rule simply does not fire.
    pub fn activations(&self, input_activations: &IndexMap<String, f64>) -> Vec<f64> {
        self.0
            .iter()
            .map(|rule| input_activations.get(&rule.antecedent).copied().unwrap_or(0.))
            .collect()
    }

    /// Strict check that every rule references existing terms.
    ///
    /// Inference tolerates unmatched rules by skipping them; this surfaces
    /// the same conditions as typed errors for callers that want to validate
    /// a rule base at load time.
    pub fn validate(
        &self,
        input: &LinguisticVariable,
        output: &LinguisticVariable,
    ) -> FuzzyResult<()> {
        for (index, rule) in self.0.iter().enumerate() {
            if input.term(&rule.antecedent).is_none() {
                return Err(FuzzyError::UnknownAntecedent {
                    index,
                    term: rule.antecedent.clone(),
                });
            }
            if output.term(&rule.consequent).is_none() {
                return Err(FuzzyError::UnknownConsequent {
                    index,
                    term: rule.consequent.clone(),
                });
            }
        }

        Ok(())
    }
}

impl FromIterator<Rule> for RuleBase {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        RuleBase(iter.into_iter().collect())
    }
}

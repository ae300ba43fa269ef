//! Document model for the three configuration inputs and engine defaults.
//!
//! The documents are plain JSON: a variable document maps a variable name to
//! its term list, a rules document is a list of `[antecedent, consequent]`
//! pairs. Parsing failures are fatal; everything structural beyond that
//! (degenerate terms, unmatched rule ids) degrades gracefully at inference
//! time.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{FuzzyError, FuzzyResult};
use crate::rules::{Rule, RuleBase};
use crate::variable::{LinguisticVariable, Term};

/// Default number of samples taken across the output domain.
pub const DEFAULT_STEPS: usize = 1001;

/// Output domain assumed when the output variable declares no terms.
pub const DEFAULT_FALLBACK_DOMAIN: (f64, f64) = (0., 10.);

/// Engine-wide settings, each an explicit field with a stated default.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of evenly spaced samples across the output domain.
    pub steps: usize,
    /// Domain used when the output variable has no terms to take bounds
    /// from.
    pub fallback_domain: (f64, f64),
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            steps: DEFAULT_STEPS,
            fallback_domain: DEFAULT_FALLBACK_DOMAIN,
        }
    }
}

/// Raw term entry as it appears in a variable document.
#[derive(Clone, Debug, Deserialize)]
struct TermEntry {
    id: String,
    points: Vec<(f64, f64)>,
}

impl From<TermEntry> for Term {
    fn from(entry: TermEntry) -> Self {
        Term::new(entry.id, entry.points)
    }
}

/// A linguistic-variable document: variable name mapped to its term list.
#[derive(Clone, Debug, Deserialize)]
#[serde(transparent)]
pub struct VariableDocument(IndexMap<String, Vec<TermEntry>>);

impl VariableDocument {
    /// Parses a document from its JSON text.
    pub fn from_json(text: &str) -> FuzzyResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> FuzzyResult<Self> {
        Self::from_json(&read_file(path.as_ref())?)
    }

    /// Builds the named variable.
    pub fn variable(&self, name: &str) -> FuzzyResult<LinguisticVariable> {
        let terms = self
            .0
            .get(name)
            .ok_or_else(|| FuzzyError::MissingVariable(name.to_string()))?;

        LinguisticVariable::new(name, terms.iter().cloned().map(Term::from))
    }

    /// Builds the document's first variable, for single-variable documents.
    pub fn into_variable(self) -> FuzzyResult<LinguisticVariable> {
        let (name, terms) = self.0.into_iter().next().ok_or(FuzzyError::EmptyDocument)?;

        LinguisticVariable::new(name, terms.into_iter().map(Term::from))
    }
}

/// A rule document: a list of `[antecedent, consequent]` pairs, evaluated in
/// declaration order.
#[derive(Clone, Debug, Deserialize)]
#[serde(transparent)]
pub struct RulesDocument(Vec<(String, String)>);

impl RulesDocument {
    /// Parses a document from its JSON text.
    pub fn from_json(text: &str) -> FuzzyResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> FuzzyResult<Self> {
        Self::from_json(&read_file(path.as_ref())?)
    }

    pub fn into_rule_base(self) -> RuleBase {
        self.0
            .into_iter()
            .map(|(antecedent, consequent)| Rule::new(antecedent, consequent))
            .collect()
    }
}

fn read_file(path: &Path) -> FuzzyResult<String> {
    fs::read_to_string(path).map_err(|e| FuzzyError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

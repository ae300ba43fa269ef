use indexmap::IndexMap;
use tracing::warn;

use crate::error::{FuzzyError, FuzzyResult};
use crate::math::membership_sorted;

/// A named fuzzy set within a linguistic variable, defined by a
/// piecewise-linear membership function over its knots.
#[derive(Clone, Debug, PartialEq)]
pub struct Term {
    id: String,
    points: Vec<(f64, f64)>,
}

impl Term {
    /// Builds a term, sorting its knots by x.
    pub fn new(id: impl Into<String>, mut points: Vec<(f64, f64)>) -> Self {
        points.sort_unstable_by(|a, b| a.0.partial_cmp(&b.0).expect("not to find unsortable floats"));

        Term {
            id: id.into(),
            points,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The term's knots, sorted by x.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Membership degree of `x` in this term.
    pub fn membership(&self, x: f64) -> f64 {
        membership_sorted(x, &self.points)
    }

    /// A term needs at least two knots to describe a usable curve; anything
    /// less holds zero membership everywhere.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }
}

/// A named concept partitioned into overlapping fuzzy terms.
///
/// Term ids are unique within the variable, enforced at construction. The
/// collection is immutable once built.
#[derive(Clone, Debug)]
pub struct LinguisticVariable {
    name: String,
    terms: IndexMap<String, Term>,
}

impl LinguisticVariable {
    pub fn new(name: impl Into<String>, terms: impl IntoIterator<Item = Term>) -> FuzzyResult<Self> {
        let name = name.into();
        let mut map = IndexMap::new();

        for term in terms {
            if term.is_degenerate() {
                warn!(
                    variable = %name,
                    term = %term.id,
                    "term has fewer than two knots and holds zero membership"
                );
            }

            let id = term.id.clone();

            if map.insert(id.clone(), term).is_some() {
                return Err(FuzzyError::DuplicateTerm {
                    variable: name,
                    term: id,
                });
            }
        }

        Ok(LinguisticVariable { name, terms: map })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Looks up a term by id.
    pub fn term(&self, id: &str) -> Option<&Term> {
        self.terms.get(id)
    }

    /// Iterates terms in declaration order.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.terms.values()
    }

    /// Membership degree of `value` in every term, keyed by term id.
    ///
    /// Degrees are independent per term and unnormalized; overlapping terms
    /// may all activate at once.
    pub fn activate(&self, value: f64) -> IndexMap<String, f64> {
        self.terms
            .iter()
            .map(|(id, term)| (id.clone(), term.membership(value)))
            .collect()
    }

    /// Smallest and largest knot x over all terms, or `None` for a variable
    /// with no terms.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;

        for term in self.terms.values() {
            for &(x, _) in &term.points {
                bounds = match bounds {
                    None => Some((x, x)),
                    Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
                };
            }
        }

        bounds
    }
}

//! Error types for configuration loading and validation.
//!
//! Inference itself never fails: degenerate terms hold zero membership and
//! unmatched rules contribute nothing, so a single bad rule never blocks a
//! control decision. Only configuration handling surfaces errors.

use thiserror::Error;

/// Errors raised while loading or validating engine configuration.
#[derive(Debug, Error)]
pub enum FuzzyError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file '{path}': {message}")]
    Io {
        /// Path of the file that could not be read
        path: String,
        /// Underlying I/O error message
        message: String,
    },

    /// Document is not valid JSON of the expected shape.
    #[error("malformed configuration document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    /// Variable document declares no variables at all.
    #[error("variable document declares no variables")]
    EmptyDocument,

    /// Named variable is absent from its document.
    #[error("variable '{0}' not found in document")]
    MissingVariable(String),

    /// Two terms of one variable share an id.
    #[error("variable '{variable}' declares duplicate term id '{term}'")]
    DuplicateTerm {
        /// Name of the variable holding the clashing terms
        variable: String,
        /// The duplicated term id
        term: String,
    },

    /// Rule antecedent names no term of the input variable.
    ///
    /// Raised only by strict validation; inference skips such rules.
    #[error("rule {index} references unknown antecedent term '{term}'")]
    UnknownAntecedent {
        /// Zero-based position of the rule in its rule base
        index: usize,
        /// The unmatched term id
        term: String,
    },

    /// Rule consequent names no term of the output variable.
    ///
    /// Raised only by strict validation; inference skips such rules.
    #[error("rule {index} references unknown consequent term '{term}'")]
    UnknownConsequent {
        /// Zero-based position of the rule in its rule base
        index: usize,
        /// The unmatched term id
        term: String,
    },
}

/// Convenient Result alias for configuration operations.
pub type FuzzyResult<T> = Result<T, FuzzyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_term_display() {
        let err = FuzzyError::DuplicateTerm {
            variable: "temperature".to_string(),
            term: "cold".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("temperature"));
        assert!(msg.contains("cold"));
    }

    #[test]
    fn test_unknown_antecedent_display() {
        let err = FuzzyError::UnknownAntecedent {
            index: 3,
            term: "scorching".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("rule 3"));
        assert!(msg.contains("scorching"));
    }

    #[test]
    fn test_malformed_document_from_serde() {
        let parse_err = serde_json::from_str::<Vec<f64>>("not json").unwrap_err();
        let err = FuzzyError::from(parse_err);
        assert!(matches!(err, FuzzyError::MalformedDocument(_)));
        assert!(err.to_string().contains("malformed configuration document"));
    }

    #[test]
    fn test_io_display() {
        let err = FuzzyError::Io {
            path: "rules.json".to_string(),
            message: "No such file or directory".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("rules.json"));
        assert!(msg.contains("No such file"));
    }
}

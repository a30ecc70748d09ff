//! Predicate error types.

use iseq_parser::ParseError;
use thiserror::Error;

/// Errors that can occur while compiling or evaluating a predicate.
#[derive(Debug, Clone, Error)]
pub enum PredicateError {
    /// The pattern text does not conform to the grammar.
    #[error("invalid integer pattern: {0}")]
    Syntax(#[from] ParseError),

    /// A bracket group parsed but is not a flat atom enumeration.
    #[error("too many quotes at integer pattern-{slot}")]
    AmbiguousGrouping { slot: usize },

    /// A query's length does not match the predicate's arity.
    #[error("{}", arity_message(.expected, .found))]
    ArityMismatch { expected: usize, found: usize },
}

impl PredicateError {
    pub fn ambiguous_grouping(slot: usize) -> Self {
        Self::AmbiguousGrouping { slot }
    }

    pub fn arity_mismatch(expected: usize, found: usize) -> Self {
        Self::ArityMismatch { expected, found }
    }
}

fn arity_message(expected: &usize, found: &usize) -> String {
    if *expected == 1 {
        format!(
            "expecting integer or length-1 int sequence, but got length-{} sequence",
            found
        )
    } else {
        format!(
            "expecting length-{} int sequence, but got length-{} sequence",
            expected, found
        )
    }
}

/// Result type for predicate operations.
pub type PredicateResult<T> = Result<T, PredicateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_mismatch_message_distinguishes_scalar_case() {
        let scalar = PredicateError::arity_mismatch(1, 2);
        assert_eq!(
            scalar.to_string(),
            "expecting integer or length-1 int sequence, but got length-2 sequence"
        );

        let general = PredicateError::arity_mismatch(3, 1);
        assert_eq!(
            general.to_string(),
            "expecting length-3 int sequence, but got length-1 sequence"
        );
    }

    #[test]
    fn test_ambiguous_grouping_message() {
        assert_eq!(
            PredicateError::ambiguous_grouping(1).to_string(),
            "too many quotes at integer pattern-1"
        );
    }
}

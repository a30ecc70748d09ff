//! ISEQ Predicate
//!
//! Compile integer-set patterns into reusable predicates.
//!
//! Responsibilities:
//! - Materialize parsed atoms into half-open integer intervals
//! - Simplify each slot into disjoint, sorted intervals
//! - Flatten slots into boundary arrays for binary-search membership
//! - Evaluate integers and fixed-length integer sequences

mod error;
mod interval;
mod predicate;

pub use error::{PredicateError, PredicateResult};
pub use interval::{Bound, Interval};
pub use predicate::{compile, IntSeqPredicate};

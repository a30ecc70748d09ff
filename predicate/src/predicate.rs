//! Compiled integer-sequence predicates.
//!
//! A compiled predicate holds one boundary array per slot: the slot's
//! simplified intervals flattened into a strictly increasing, even-length
//! sequence of endpoints. Membership is an upper-bound binary search; a
//! value lies inside the interval union exactly when an odd number of
//! endpoints are less than or equal to it.

use crate::error::{PredicateError, PredicateResult};
use crate::interval::{Bound, Interval};
use iseq_parser::{Atom, Group, Pattern};

/// An immutable predicate over integers or fixed-length integer sequences,
/// compiled from a pattern string.
///
/// Compilation happens once, eagerly; evaluation never mutates the
/// predicate, so one instance can be shared across threads freely.
///
/// ```
/// use iseq_predicate::IntSeqPredicate;
///
/// let single = IntSeqPredicate::compile("4,5,7")?;
/// assert!(single.matches_int(7)?);
/// assert!(!single.matches_int(8)?);
///
/// let pair = IntSeqPredicate::compile("[:],[3]")?;
/// assert!(pair.matches(&[4, 3])?);
/// assert!(!pair.matches(&[4, 5])?);
/// # Ok::<(), iseq_predicate::PredicateError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntSeqPredicate {
    slots: Vec<Vec<Bound>>,
}

impl IntSeqPredicate {
    /// Compile a pattern into a predicate.
    ///
    /// Fails with [`PredicateError::Syntax`] when the pattern does not
    /// conform to the grammar, and with
    /// [`PredicateError::AmbiguousGrouping`] when a bracket group is not a
    /// flat atom enumeration.
    pub fn compile(pattern: &str) -> PredicateResult<IntSeqPredicate> {
        let slots = match iseq_parser::parse(pattern)? {
            Pattern::Scalar(atoms) => vec![compile_slot(&atoms)],
            Pattern::Sequence(groups) => groups
                .iter()
                .enumerate()
                .map(|(slot, group)| match group {
                    Group::Atoms(atoms) => Ok(compile_slot(atoms)),
                    Group::Malformed => Err(PredicateError::ambiguous_grouping(slot)),
                })
                .collect::<PredicateResult<_>>()?,
        };
        Ok(IntSeqPredicate { slots })
    }

    /// The fixed number of slots this predicate expects.
    pub fn arity(&self) -> usize {
        self.slots.len()
    }

    /// The per-slot boundary arrays. Each array is strictly increasing and
    /// even-length; the value at an even index starts a contained interval
    /// and the following value ends it.
    pub fn boundaries(&self) -> &[Vec<Bound>] {
        &self.slots
    }

    /// Test a fixed-length integer sequence against the predicate.
    ///
    /// Fails with [`PredicateError::ArityMismatch`] when the sequence
    /// length differs from [`arity`](Self::arity).
    pub fn matches(&self, values: &[i64]) -> PredicateResult<bool> {
        if values.len() != self.slots.len() {
            return Err(PredicateError::arity_mismatch(
                self.slots.len(),
                values.len(),
            ));
        }
        Ok(self
            .slots
            .iter()
            .zip(values)
            .all(|(bounds, &value)| slot_contains(bounds, value)))
    }

    /// Test a single integer, treated as a length-1 sequence.
    pub fn matches_int(&self, value: i64) -> PredicateResult<bool> {
        self.matches(&[value])
    }
}

/// Compile a pattern into a predicate. See [`IntSeqPredicate::compile`].
pub fn compile(pattern: &str) -> PredicateResult<IntSeqPredicate> {
    IntSeqPredicate::compile(pattern)
}

/// Build one slot's boundary array from its parsed atoms.
fn compile_slot(atoms: &[Atom]) -> Vec<Bound> {
    let mut intervals: Vec<Interval> = atoms
        .iter()
        .map(Interval::from_atom)
        .filter(|interval| !interval.is_empty())
        .collect();

    // A universe atom swallows everything else in the slot.
    if intervals.iter().any(Interval::is_universe) {
        intervals = vec![Interval::UNIVERSE];
    }

    intervals.sort_by_key(|interval| (interval.lo, interval.hi));

    // Merge overlapping and touching intervals. Intervals are half-open,
    // so `next.lo == last.hi` is exact adjacency and merges too.
    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(last) if interval.lo <= last.hi => {
                if interval.hi > last.hi {
                    last.hi = interval.hi;
                }
            }
            _ => merged.push(interval),
        }
    }

    merged
        .iter()
        .flat_map(|interval| [interval.lo, interval.hi])
        .collect()
}

/// Upper-bound binary search parity test: `value` is inside the slot's
/// interval union exactly when an odd number of endpoints are <= it.
fn slot_contains(bounds: &[Bound], value: i64) -> bool {
    let below = bounds.partition_point(|bound| *bound <= Bound::Value(value));
    below % 2 == 1
}

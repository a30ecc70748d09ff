//! Abstract syntax tree for integer-set patterns.

use std::fmt;

/// Source location for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, column: usize) -> Self {
        Self { start, end, column }
    }
}

/// One elementary interval of integers, as written in the pattern.
///
/// Bounds are kept exactly as parsed; turning an atom into a half-open
/// interval is the predicate compiler's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Atom {
    /// A single integer, `5`.
    Single(i64),
    /// Everything strictly below a bound, `:5`.
    Prefix(i64),
    /// Everything at or above a bound, `5:`.
    Suffix(i64),
    /// A range inclusive at both ends, `1-5`.
    InclusiveRange(i64, i64),
    /// A range inclusive below and exclusive above, `1:5`.
    ExclusiveRange(i64, i64),
    /// Every integer, `:`.
    All,
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Single(a) => write!(f, "{}", a),
            Atom::Prefix(b) => write!(f, ":{}", b),
            Atom::Suffix(a) => write!(f, "{}:", a),
            Atom::InclusiveRange(a, b) => write!(f, "{}-{}", a, b),
            Atom::ExclusiveRange(a, b) => write!(f, "{}:{}", a, b),
            Atom::All => write!(f, ":"),
        }
    }
}

/// One bracket-delimited slot of a sequence pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Group {
    /// A well-formed atom enumeration.
    Atoms(Vec<Atom>),
    /// The group parsed, but its contents are not a flat atom enumeration
    /// (nested brackets, or nothing at all). The predicate compiler rejects
    /// these with the slot index.
    Malformed,
}

/// A parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// A bare enumeration without brackets; one implicit slot. The empty
    /// pattern parses as a scalar with no atoms.
    Scalar(Vec<Atom>),
    /// A bracketed sequence pattern; one group per slot.
    Sequence(Vec<Group>),
}

impl Pattern {
    /// Number of slots a predicate compiled from this pattern will have.
    pub fn arity(&self) -> usize {
        match self {
            Pattern::Scalar(_) => 1,
            Pattern::Sequence(groups) => groups.len(),
        }
    }
}

fn write_atoms(f: &mut fmt::Formatter<'_>, atoms: &[Atom]) -> fmt::Result {
    for (i, atom) in atoms.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{}", atom)?;
    }
    Ok(())
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Scalar(atoms) => write_atoms(f, atoms),
            Pattern::Sequence(groups) => {
                for (i, group) in groups.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "[")?;
                    if let Group::Atoms(atoms) = group {
                        write_atoms(f, atoms)?;
                    }
                    write!(f, "]")?;
                }
                Ok(())
            }
        }
    }
}

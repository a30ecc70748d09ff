//! Interval representation for compiled predicates.
//!
//! Every atom of the pattern language denotes a half-open interval of
//! integers, possibly unbounded on either side. [`Bound`] keeps the
//! infinities as explicit variants so interval endpoints have a total
//! order without borrowing a numeric infinity from floats.

use iseq_parser::Atom;

/// An interval endpoint.
///
/// The derived ordering is total: `NegInf < Value(x) < PosInf` for every
/// `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Bound {
    NegInf,
    Value(i64),
    PosInf,
}

impl Bound {
    /// The successor of a finite bound. Saturates to `PosInf` so a range
    /// closed at `i64::MAX` still has a representable upper endpoint;
    /// infinite bounds are their own successor.
    pub fn succ(self) -> Bound {
        match self {
            Bound::Value(v) => v.checked_add(1).map(Bound::Value).unwrap_or(Bound::PosInf),
            other => other,
        }
    }
}

/// A half-open interval `[lo, hi)` of integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub lo: Bound,
    pub hi: Bound,
}

impl Interval {
    /// The interval containing every integer.
    pub const UNIVERSE: Interval = Interval {
        lo: Bound::NegInf,
        hi: Bound::PosInf,
    };

    pub fn new(lo: Bound, hi: Bound) -> Self {
        Self { lo, hi }
    }

    /// A half-open interval is empty whenever its bounds are out of order.
    /// Degenerate ranges like `5:3` produce these; they contain no integer
    /// and drop out during simplification.
    pub fn is_empty(&self) -> bool {
        self.hi <= self.lo
    }

    pub fn is_universe(&self) -> bool {
        *self == Interval::UNIVERSE
    }

    /// Materialize a parsed atom into its interval.
    ///
    /// | atom    | interval       |
    /// |---------|----------------|
    /// | `a`     | `[a, a+1)`     |
    /// | `:b`    | `(-inf, b)`    |
    /// | `a:`    | `[a, +inf)`    |
    /// | `a-b`   | `[a, b+1)`     |
    /// | `a:b`   | `[a, b)`       |
    /// | `:`     | `(-inf, +inf)` |
    pub fn from_atom(atom: &Atom) -> Interval {
        match *atom {
            Atom::Single(a) => Interval::new(Bound::Value(a), Bound::Value(a).succ()),
            Atom::Prefix(b) => Interval::new(Bound::NegInf, Bound::Value(b)),
            Atom::Suffix(a) => Interval::new(Bound::Value(a), Bound::PosInf),
            Atom::InclusiveRange(a, b) => Interval::new(Bound::Value(a), Bound::Value(b).succ()),
            Atom::ExclusiveRange(a, b) => Interval::new(Bound::Value(a), Bound::Value(b)),
            Atom::All => Interval::UNIVERSE,
        }
    }
}

//! Generic weight capability the enumerator is built against.
//!
//! The subset-sum search never touches talks directly; it works on
//! anything exposing a totally ordered, addable/subtractable weight.
//! This keeps the engine reusable across unit types: talk durations in
//! production, plain integers in tests.

use std::fmt::Debug;
use std::ops::{Add, Sub};

use chrono::TimeDelta;

/// A weight quantity: totally ordered, closed under addition and
/// subtraction, with a positivity predicate.
pub trait Weight: Copy + Ord + Debug + Add<Output = Self> + Sub<Output = Self> {
    /// Whether this weight is strictly greater than zero.
    fn is_positive(self) -> bool;
}

impl Weight for i64 {
    fn is_positive(self) -> bool {
        self > 0
    }
}

impl Weight for TimeDelta {
    fn is_positive(self) -> bool {
        self > TimeDelta::zero()
    }
}

/// An item that carries a weight.
///
/// Implemented by [`Talk`](crate::Talk) (weight = duration) and by
/// `i64` itself so the enumerator can be exercised on raw integers.
pub trait Weighable {
    /// The quantity type this item is weighed in.
    type Weight: Weight;

    /// The item's weight.
    fn weight(&self) -> Self::Weight;
}

impl Weighable for i64 {
    type Weight = i64;

    fn weight(&self) -> i64 {
        *self
    }
}

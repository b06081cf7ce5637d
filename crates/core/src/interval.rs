//! Closed real intervals with outward-rounded arithmetic.
//!
//! An [`Interval`] `[lo, hi]` encloses every real number between its bounds.
//! All operations are sound: the result encloses every value the real
//! operation can take on operands drawn from the input intervals. Bounds are
//! rounded outward (see [`round`]), so floating-point error never shrinks an
//! enclosure.
//!
//! Operations that can leave the single-interval world (division by an
//! interval containing zero, negative powers of such an interval, logarithms
//! of partly negative ranges) come in two flavors: a checked form here that
//! returns [`IntervalError`], and a lifted form on
//! [`IntervalSet`](crate::IntervalSet) that always succeeds.

mod elementary;
mod error;
mod ops;
pub(crate) mod round;

use std::fmt;

pub use error::IntervalError;

/// A closed, non-empty real interval `[lo, hi]` with `lo <= hi`.
///
/// Equal bounds represent an exact value. Bounds may be infinite, which only
/// happens as the result of extended division; such intervals still contain
/// at least one real number.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 2]", into = "[f64; 2]")
)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    /// The whole real line.
    pub const ENTIRE: Self = Self {
        lo: f64::NEG_INFINITY,
        hi: f64::INFINITY,
    };

    /// The exact value zero.
    pub const ZERO: Self = Self { lo: 0.0, hi: 0.0 };

    /// The exact value one.
    pub const ONE: Self = Self { lo: 1.0, hi: 1.0 };

    /// Creates a validated interval.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is NaN, if `lo > hi`, or if both bounds
    /// are the same infinity.
    pub fn new(lo: f64, hi: f64) -> Result<Self, IntervalError> {
        if lo.is_nan() || hi.is_nan() {
            return Err(IntervalError::NotANumber);
        }
        if lo > hi {
            return Err(IntervalError::Inverted { lo, hi });
        }
        if lo == f64::INFINITY || hi == f64::NEG_INFINITY {
            return Err(IntervalError::Unbounded { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Creates the tightest enclosure of a single value.
    ///
    /// Finite values give a degenerate interval. An infinity is treated as an
    /// overflowed magnitude and encloses everything beyond the largest finite
    /// value; NaN carries no information and encloses the whole line.
    #[must_use]
    pub fn point(value: f64) -> Self {
        if value.is_finite() {
            Self {
                lo: value,
                hi: value,
            }
        } else if value == f64::INFINITY {
            Self {
                lo: f64::MAX,
                hi: f64::INFINITY,
            }
        } else if value == f64::NEG_INFINITY {
            Self {
                lo: f64::NEG_INFINITY,
                hi: f64::MIN,
            }
        } else {
            Self::ENTIRE
        }
    }

    /// Builds an interval from bounds already known to be ordered.
    pub(crate) fn from_bounds(lo: f64, hi: f64) -> Self {
        debug_assert!(lo <= hi, "unordered bounds [{lo}, {hi}]");
        Self { lo, hi }
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Returns the bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.lo, self.hi]
    }

    /// Returns a point inside the interval halfway between the bounds.
    ///
    /// The whole line has midpoint zero; a half-unbounded interval reports
    /// its infinite side.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        if self.lo == f64::NEG_INFINITY && self.hi == f64::INFINITY {
            return 0.0;
        }
        let mid = 0.5 * self.lo + 0.5 * self.hi;
        mid.clamp(self.lo, self.hi)
    }

    /// Returns the width `hi - lo`, rounded up.
    #[must_use]
    pub fn width(&self) -> f64 {
        round::sub(self.hi, self.lo).1
    }

    /// Returns half the width, rounded up.
    #[must_use]
    pub fn radius(&self) -> f64 {
        let mid = self.midpoint();
        round::sub(self.hi, mid).1.max(round::sub(mid, self.lo).1)
    }

    /// Returns the largest absolute value in the interval.
    #[must_use]
    pub fn mag(&self) -> f64 {
        self.lo.abs().max(self.hi.abs())
    }

    /// Returns true if the interval is a single exact value.
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.lo == self.hi
    }

    /// Returns true if `value` lies in the closed interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Returns true if zero lies in the interval.
    #[must_use]
    pub fn contains_zero(&self) -> bool {
        self.contains(0.0)
    }

    /// Returns true if every value is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.lo > 0.0
    }

    /// Returns true if every value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.hi < 0.0
    }

    /// Returns true if the two closed intervals share at least one point.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.lo <= other.hi && other.lo <= self.hi
    }

    /// Returns true if `self` lies entirely inside `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        other.lo <= self.lo && self.hi <= other.hi
    }

    /// Returns the common part of two intervals, if any.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let lo = self.lo.max(other.lo);
        let hi = self.hi.min(other.hi);
        (lo <= hi).then_some(Self { lo, hi })
    }

    /// Returns the smallest interval containing both intervals.
    #[must_use]
    pub fn hull(&self, other: &Self) -> Self {
        Self {
            lo: self.lo.min(other.lo),
            hi: self.hi.max(other.hi),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = IntervalError;

    fn try_from([lo, hi]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(lo, hi)
    }
}

impl From<Interval> for [f64; 2] {
    fn from(interval: Interval) -> Self {
        interval.as_array()
    }
}

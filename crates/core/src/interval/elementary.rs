use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::{Interval, IntervalError, round};

/// Magnitude beyond which periodic range analysis falls back to `[-1, 1]`.
///
/// Past this point the phase `x / 2π` can no longer be located to within
/// [`PHASE_SLACK`] of a turn.
const MAX_PERIODIC_ARG: f64 = 1_048_576.0;

/// Tolerance, in turns, when testing whether an extremum lies inside.
///
/// A near miss counts as a hit, which only ever widens the result.
const PHASE_SLACK: f64 = 1e-9;

impl Interval {
    /// Encloses `sin(x)` for every `x` in the interval.
    ///
    /// Includes `1` or `-1` whenever the interval reaches a peak or trough,
    /// not just the values at the two bounds.
    #[must_use]
    pub fn sin(self) -> Self {
        self.periodic(f64::sin, FRAC_PI_2, -FRAC_PI_2)
    }

    /// Encloses `cos(x)` for every `x` in the interval.
    #[must_use]
    pub fn cos(self) -> Self {
        self.periodic(f64::cos, 0.0, PI)
    }

    /// Encloses `exp(x)` for every `x` in the interval.
    ///
    /// An overflowing lower bound is clamped to the largest finite value.
    #[must_use]
    pub fn exp(self) -> Self {
        let lo = round::libm_down(self.lo.exp()).clamp(0.0, f64::MAX);
        let hi = round::libm_up(self.hi.exp());
        Self::from_bounds(lo, hi)
    }

    /// Encloses `ln(x)` for every positive `x` in the interval.
    ///
    /// Non-positive values are ignored, so an interval reaching zero gets an
    /// unbounded lower end.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::OutOfDomain`] if the interval contains no
    /// positive value.
    pub fn ln(self) -> Result<Self, IntervalError> {
        if self.hi <= 0.0 {
            return Err(IntervalError::OutOfDomain {
                function: "ln",
                lo: self.lo,
                hi: self.hi,
            });
        }
        let lo = if self.lo <= 0.0 {
            f64::NEG_INFINITY
        } else {
            round::libm_down(self.lo.ln())
        };
        let hi = round::libm_up(self.hi.ln());
        Ok(Self::from_bounds(lo, hi))
    }

    /// Encloses `sqrt(x)` for every non-negative `x` in the interval.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::OutOfDomain`] if the interval is entirely
    /// negative.
    pub fn sqrt(self) -> Result<Self, IntervalError> {
        if self.hi < 0.0 {
            return Err(IntervalError::OutOfDomain {
                function: "sqrt",
                lo: self.lo,
                hi: self.hi,
            });
        }
        let lo = if self.lo <= 0.0 {
            0.0
        } else {
            round::sqrt(self.lo).0
        };
        Ok(Self::from_bounds(lo, round::sqrt(self.hi).1))
    }

    /// Range of a `2π`-periodic function with unit amplitude.
    ///
    /// `peak` and `trough` are the phases of the maximum and minimum.
    fn periodic(self, f: fn(f64) -> f64, peak: f64, trough: f64) -> Self {
        let unit = Self::from_bounds(-1.0, 1.0);
        if self.mag() > MAX_PERIODIC_ARG || self.width() >= TAU {
            return unit;
        }

        let (a, b) = (f(self.lo), f(self.hi));
        let mut lo = round::libm_down(a.min(b));
        let mut hi = round::libm_up(a.max(b));

        if reaches_phase(self, peak) {
            hi = 1.0;
        }
        if reaches_phase(self, trough) {
            lo = -1.0;
        }

        Self::from_bounds(lo.max(-1.0), hi.min(1.0))
    }
}

/// Returns true if `phase + 2πk` may lie in the interval for some integer `k`.
fn reaches_phase(x: Interval, phase: f64) -> bool {
    let first = ((x.lo - phase) / TAU - PHASE_SLACK).ceil();
    let last = (x.hi - phase) / TAU + PHASE_SLACK;
    first <= last
}

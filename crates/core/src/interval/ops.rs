use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::IntervalSet;

use super::{Interval, IntervalError, round};

impl Interval {
    /// Divides by an interval that does not contain zero.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::DivisionByZeroAmbiguous`] if `rhs` contains
    /// zero. Use `/` (which yields an [`IntervalSet`]) to get the pieces.
    pub fn checked_div(self, rhs: Self) -> Result<Self, IntervalError> {
        if rhs.contains_zero() {
            return Err(IntervalError::DivisionByZeroAmbiguous);
        }
        Ok(corners(self, rhs, round::div))
    }

    /// Returns `1 / self` for an interval that does not contain zero.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::DivisionByZeroAmbiguous`] if `self` contains
    /// zero.
    pub fn checked_recip(self) -> Result<Self, IntervalError> {
        Self::ONE.checked_div(self)
    }

    /// Returns every value of `1 / x` for non-zero `x` in the interval.
    ///
    /// A straddling interval `[lo, hi]` with `lo < 0 < hi` yields two pieces,
    /// `[-inf, 1/lo]` and `[1/hi, +inf]`. A zero bound yields one unbounded
    /// piece, and the exact value zero yields the empty set.
    #[must_use]
    pub fn recip(self) -> IntervalSet {
        if !self.contains_zero() {
            return Self::ONE
                .checked_div(self)
                .map_or_else(|_| IntervalSet::empty(), IntervalSet::from);
        }

        let mut pieces = Vec::with_capacity(2);
        if self.lo < 0.0 {
            pieces.push(Self::from_bounds(
                f64::NEG_INFINITY,
                round::div(1.0, self.lo).1,
            ));
        }
        if self.hi > 0.0 {
            pieces.push(Self::from_bounds(round::div(1.0, self.hi).0, f64::INFINITY));
        }
        IntervalSet::new(pieces)
    }

    /// Raises the interval to an integer power.
    ///
    /// Even powers account for the minimum at zero when the interval
    /// straddles it; odd powers are monotonic. `x^0` is one everywhere.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::DivisionByZeroAmbiguous`] for a negative
    /// power of an interval containing zero. Use
    /// [`IntervalSet::powi`] to get the unbounded pieces.
    pub fn powi(self, n: i32) -> Result<Self, IntervalError> {
        let power = self.pow_unsigned(n.unsigned_abs());
        if n < 0 { power.checked_recip() } else { Ok(power) }
    }

    /// Raises the interval to a non-negative integer power.
    pub(crate) fn pow_unsigned(self, n: u32) -> Self {
        if n == 0 {
            return Self::ONE;
        }
        if n % 2 == 1 {
            return Self::from_bounds(signed_pow(self.lo, n).0, signed_pow(self.hi, n).1);
        }
        if self.lo >= 0.0 {
            Self::from_bounds(magnitude_pow(self.lo, n).0, magnitude_pow(self.hi, n).1)
        } else if self.hi <= 0.0 {
            Self::from_bounds(magnitude_pow(-self.hi, n).0, magnitude_pow(-self.lo, n).1)
        } else {
            Self::from_bounds(0.0, magnitude_pow(self.mag(), n).1)
        }
    }
}

/// Applies a directed-rounding operation to the four bound combinations.
fn corners(a: Interval, b: Interval, op: fn(f64, f64) -> (f64, f64)) -> Interval {
    let products = [
        op(a.lo, b.lo),
        op(a.lo, b.hi),
        op(a.hi, b.lo),
        op(a.hi, b.hi),
    ];
    let lo = products.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let hi = products
        .iter()
        .map(|p| p.1)
        .fold(f64::NEG_INFINITY, f64::max);
    Interval::from_bounds(lo, hi)
}

/// Bounds on `x^n` for `x >= 0`, by binary exponentiation.
///
/// Every factor is non-negative, so multiplying lower bounds gives a lower
/// bound and multiplying upper bounds gives an upper bound.
fn magnitude_pow(x: f64, n: u32) -> (f64, f64) {
    let (mut base_lo, mut base_hi) = (x, x);
    let (mut acc_lo, mut acc_hi) = (1.0, 1.0);
    let mut exp = n;
    while exp > 0 {
        if exp & 1 == 1 {
            acc_lo = round::mul(acc_lo, base_lo).0;
            acc_hi = round::mul(acc_hi, base_hi).1;
        }
        exp >>= 1;
        if exp > 0 {
            base_lo = round::mul(base_lo, base_lo).0;
            base_hi = round::mul(base_hi, base_hi).1;
        }
    }
    (acc_lo, acc_hi)
}

/// Bounds on `x^n` for odd `n` and any sign of `x`.
fn signed_pow(x: f64, n: u32) -> (f64, f64) {
    if x >= 0.0 {
        magnitude_pow(x, n)
    } else {
        let (lo, hi) = magnitude_pow(-x, n);
        (-hi, -lo)
    }
}

impl Neg for Interval {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_bounds(-self.hi, -self.lo)
    }
}

impl Add for Interval {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_bounds(round::add(self.lo, rhs.lo).0, round::add(self.hi, rhs.hi).1)
    }
}

impl Sub for Interval {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_bounds(round::sub(self.lo, rhs.hi).0, round::sub(self.hi, rhs.lo).1)
    }
}

impl Mul for Interval {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        corners(self, rhs, round::mul)
    }
}

/// Extended division: a divisor containing zero splits the quotient.
impl Div for Interval {
    type Output = IntervalSet;

    fn div(self, rhs: Self) -> IntervalSet {
        if let Ok(quotient) = self.checked_div(rhs) {
            return IntervalSet::from(quotient);
        }
        rhs.recip().iter().map(|piece| self * *piece).collect()
    }
}

macro_rules! scalar_ops {
    ($($trait:ident :: $method:ident),*) => {
        $(
            impl $trait<f64> for Interval {
                type Output = Interval;

                fn $method(self, rhs: f64) -> Interval {
                    self.$method(Interval::point(rhs))
                }
            }

            impl $trait<Interval> for f64 {
                type Output = Interval;

                fn $method(self, rhs: Interval) -> Interval {
                    Interval::point(self).$method(rhs)
                }
            }
        )*
    };
}

scalar_ops!(Add::add, Sub::sub, Mul::mul);

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn iv(lo: f64, hi: f64) -> Interval {
        Interval::new(lo, hi).expect("valid interval")
    }

    #[test]
    fn add_sub_neg_follow_bound_rules() {
        let a = iv(1.0, 2.0);
        let b = iv(-3.0, 5.0);

        assert_eq!(a + b, iv(-2.0, 7.0));
        assert_eq!(a - b, iv(-4.0, 5.0));
        assert_eq!(-b, iv(-5.0, 3.0));
        assert_eq!(a + 1.0, iv(2.0, 3.0));
        assert_eq!(10.0 - a, iv(8.0, 9.0));
    }

    #[test]
    fn multiplication_uses_all_corners() {
        assert_eq!(iv(-1.0, 2.0) * iv(-3.0, 4.0), iv(-6.0, 8.0));
        assert_eq!(iv(-2.0, -1.0) * iv(3.0, 4.0), iv(-8.0, -3.0));
        assert_eq!(2.0 * iv(-1.0, 1.0), iv(-2.0, 2.0));
    }

    #[test]
    fn checked_division_rejects_zero_divisor() {
        assert_eq!(
            iv(1.0, 2.0).checked_div(iv(-1.0, 1.0)),
            Err(IntervalError::DivisionByZeroAmbiguous)
        );
        assert_eq!(iv(1.0, 2.0).checked_div(iv(4.0, 8.0)), Ok(iv(0.125, 0.5)));
    }

    #[test]
    fn division_by_straddling_interval_has_two_pieces() {
        let quotient = iv(1.0, 2.0) / iv(-1.0, 1.0);

        assert_eq!(quotient.len(), 2);
        assert_eq!(quotient.parts()[0], iv(f64::NEG_INFINITY, -1.0));
        assert_eq!(quotient.parts()[1], iv(1.0, f64::INFINITY));
    }

    #[test]
    fn division_by_half_open_divisor_has_one_piece() {
        let quotient = iv(1.0, 2.0) / iv(0.0, 2.0);
        assert_eq!(quotient.parts(), &[iv(0.5, f64::INFINITY)]);
    }

    #[test]
    fn division_by_exact_zero_is_empty() {
        assert!((iv(1.0, 2.0) / Interval::ZERO).is_empty());
    }

    #[test]
    fn numerator_with_zero_over_straddling_divisor_is_entire() {
        let quotient = iv(-1.0, 1.0) / iv(-2.0, 3.0);
        assert_eq!(quotient.parts(), &[Interval::ENTIRE]);
    }

    #[test]
    fn recip_cases() {
        assert_eq!(iv(2.0, 4.0).recip().parts(), &[iv(0.25, 0.5)]);
        assert_eq!(
            iv(-2.0, 0.0).recip().parts(),
            &[iv(f64::NEG_INFINITY, -0.5)]
        );
        assert!(Interval::ZERO.recip().is_empty());
        assert_eq!(iv(-4.0, 2.0).recip().len(), 2);
    }

    #[test]
    fn even_power_of_straddling_interval_starts_at_zero() {
        assert_eq!(iv(-3.0, 2.0).powi(2), Ok(iv(0.0, 9.0)));
        assert_eq!(iv(-3.0, -2.0).powi(2), Ok(iv(4.0, 9.0)));
        assert_eq!(iv(1.0, 2.0).powi(4), Ok(iv(1.0, 16.0)));
    }

    #[test]
    fn odd_power_is_monotonic() {
        assert_eq!(iv(-2.0, 3.0).powi(3), Ok(iv(-8.0, 27.0)));
        assert_eq!(iv(-1.0, 1.0).powi(1), Ok(iv(-1.0, 1.0)));
    }

    #[test]
    fn zero_power_is_one() {
        assert_eq!(iv(-5.0, 5.0).powi(0), Ok(Interval::ONE));
    }

    #[test]
    fn negative_power_is_reciprocal_of_power() {
        let x = iv(2.0, 4.0).powi(-2).expect("no zero in interval");
        assert_relative_eq!(x.lo(), 1.0 / 16.0);
        assert_relative_eq!(x.hi(), 0.25);

        assert_eq!(
            iv(-1.0, 1.0).powi(-1),
            Err(IntervalError::DivisionByZeroAmbiguous)
        );
    }

    #[test]
    fn inexact_operations_stay_sound() {
        let third = Interval::ONE.checked_div(Interval::point(3.0)).unwrap();
        let back = third * 3.0;
        assert!(back.contains(1.0));
        assert!(third.width() > 0.0);

        let sum = Interval::point(0.1) + Interval::point(0.2);
        assert!(sum.lo() < sum.hi());
    }
}

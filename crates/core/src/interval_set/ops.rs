use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::Interval;

use super::IntervalSet;

impl IntervalSet {
    /// Applies a binary interval operation to every pair of parts.
    fn lift<F>(&self, other: &Self, op: F) -> Self
    where
        F: Fn(Interval, Interval) -> IntervalSet,
    {
        let op = &op;
        self.parts
            .iter()
            .flat_map(|&a| other.parts.iter().flat_map(move |&b| op(a, b).parts))
            .collect()
    }

    /// Applies a unary interval operation to every part.
    fn map<F>(&self, op: F) -> Self
    where
        F: Fn(Interval) -> Interval,
    {
        self.parts.iter().map(|&part| op(part)).collect()
    }

    /// Encloses `sin(x)` over the set.
    #[must_use]
    pub fn sin(&self) -> Self {
        self.map(Interval::sin)
    }

    /// Encloses `cos(x)` over the set.
    #[must_use]
    pub fn cos(&self) -> Self {
        self.map(Interval::cos)
    }

    /// Encloses `exp(x)` over the set.
    #[must_use]
    pub fn exp(&self) -> Self {
        self.map(Interval::exp)
    }

    /// Encloses `ln(x)` over the positive values of the set.
    ///
    /// Parts with no positive value contribute nothing.
    #[must_use]
    pub fn ln(&self) -> Self {
        self.parts.iter().filter_map(|part| part.ln().ok()).collect()
    }

    /// Encloses `sqrt(x)` over the non-negative values of the set.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        self.parts.iter().filter_map(|part| part.sqrt().ok()).collect()
    }

    /// Raises every part to an integer power.
    ///
    /// Negative powers of parts containing zero split like [`inverse`].
    ///
    /// [`inverse`]: IntervalSet::inverse
    #[must_use]
    pub fn powi(&self, n: i32) -> Self {
        let power = self.map(|part| part.pow_unsigned(n.unsigned_abs()));
        if n < 0 { power.inverse() } else { power }
    }
}

impl Neg for IntervalSet {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|part| -part)
    }
}

impl Add for IntervalSet {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.lift(&rhs, |a, b| IntervalSet::from(a + b))
    }
}

impl Sub for IntervalSet {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.lift(&rhs, |a, b| IntervalSet::from(a - b))
    }
}

impl Mul for IntervalSet {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.lift(&rhs, |a, b| IntervalSet::from(a * b))
    }
}

impl Div for IntervalSet {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.lift(&rhs, |a, b| a / b)
    }
}

macro_rules! lifted_rhs {
    ($($trait:ident :: $method:ident),*) => {
        $(
            impl $trait<Interval> for IntervalSet {
                type Output = IntervalSet;

                fn $method(self, rhs: Interval) -> IntervalSet {
                    self.$method(IntervalSet::from(rhs))
                }
            }

            impl $trait<f64> for IntervalSet {
                type Output = IntervalSet;

                fn $method(self, rhs: f64) -> IntervalSet {
                    self.$method(IntervalSet::from(Interval::point(rhs)))
                }
            }

            impl $trait<IntervalSet> for Interval {
                type Output = IntervalSet;

                fn $method(self, rhs: IntervalSet) -> IntervalSet {
                    IntervalSet::from(self).$method(rhs)
                }
            }
        )*
    };
}

lifted_rhs!(Add::add, Sub::sub, Mul::mul, Div::div);

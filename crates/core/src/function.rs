//! Derivative providers consumed by the solvers.
//!
//! The solvers never differentiate anything themselves. A caller supplies
//! sound enclosures of `f'` and `f''` over any input interval (and, for
//! escalation, higher derivatives), however they are produced: symbolic
//! differentiation, automatic differentiation, or hand-written formulas.

use std::convert::Infallible;

use crate::Interval;

/// Encloses the derivatives of a univariate function over intervals.
///
/// Every method must be sound: the returned interval contains the true
/// derivative at every point of `x`.
pub trait Derivatives {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Encloses `f'(x)` over `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be evaluated on `x`.
    fn first(&self, x: Interval) -> Result<Interval, Self::Error>;

    /// Encloses `f''(x)` over `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be evaluated on `x`.
    fn second(&self, x: Interval) -> Result<Interval, Self::Error>;

    /// Encloses the derivative of the given order over `x`.
    ///
    /// Orders one and two forward to [`first`](Self::first) and
    /// [`second`](Self::second). Higher orders return `Ok(None)` unless the
    /// provider overrides this method.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be evaluated on `x`.
    fn nth(&self, order: usize, x: Interval) -> Result<Option<Interval>, Self::Error> {
        match order {
            1 => self.first(x).map(Some),
            2 => self.second(x).map(Some),
            _ => Ok(None),
        }
    }
}

/// Encloses the values of a univariate function over intervals.
pub trait Objective {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Encloses `f(x)` over `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the function cannot be evaluated on `x`.
    fn value(&self, x: Interval) -> Result<Interval, Self::Error>;
}

/// A [`Derivatives`] provider built from two infallible closures.
#[derive(Debug, Clone, Copy)]
pub struct FnDerivatives<D1, D2> {
    first: D1,
    second: D2,
}

/// Wraps closures for `f'` and `f''` as a [`Derivatives`] provider.
pub fn derivatives<D1, D2>(first: D1, second: D2) -> FnDerivatives<D1, D2>
where
    D1: Fn(Interval) -> Interval,
    D2: Fn(Interval) -> Interval,
{
    FnDerivatives { first, second }
}

impl<D1, D2> Derivatives for FnDerivatives<D1, D2>
where
    D1: Fn(Interval) -> Interval,
    D2: Fn(Interval) -> Interval,
{
    type Error = Infallible;

    fn first(&self, x: Interval) -> Result<Interval, Self::Error> {
        Ok((self.first)(x))
    }

    fn second(&self, x: Interval) -> Result<Interval, Self::Error> {
        Ok((self.second)(x))
    }
}

/// A function and its first two derivatives, built from closures.
///
/// Implements both [`Objective`] and [`Derivatives`], which is what the
/// global-minimum search needs.
#[derive(Debug, Clone, Copy)]
pub struct FnFunction<F, D1, D2> {
    value: F,
    derivatives: FnDerivatives<D1, D2>,
}

/// Wraps closures for `f`, `f'` and `f''`.
pub fn function<F, D1, D2>(value: F, first: D1, second: D2) -> FnFunction<F, D1, D2>
where
    F: Fn(Interval) -> Interval,
    D1: Fn(Interval) -> Interval,
    D2: Fn(Interval) -> Interval,
{
    FnFunction {
        value,
        derivatives: derivatives(first, second),
    }
}

impl<F, D1, D2> Objective for FnFunction<F, D1, D2>
where
    F: Fn(Interval) -> Interval,
{
    type Error = Infallible;

    fn value(&self, x: Interval) -> Result<Interval, Self::Error> {
        Ok((self.value)(x))
    }
}

impl<F, D1, D2> Derivatives for FnFunction<F, D1, D2>
where
    D1: Fn(Interval) -> Interval,
    D2: Fn(Interval) -> Interval,
{
    type Error = Infallible;

    fn first(&self, x: Interval) -> Result<Interval, Self::Error> {
        self.derivatives.first(x)
    }

    fn second(&self, x: Interval) -> Result<Interval, Self::Error> {
        self.derivatives.second(x)
    }
}

use thiserror::Error;

/// Errors produced by [`Interval`](super::Interval) construction and by the
/// operations that cannot always return a single interval.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum IntervalError {
    /// The lower bound exceeds the upper bound.
    #[error("inverted interval: lower bound {lo} exceeds upper bound {hi}")]
    Inverted { lo: f64, hi: f64 },

    /// A bound is NaN.
    #[error("interval bound is NaN")]
    NotANumber,

    /// Both bounds sit at the same infinity, so no real number is enclosed.
    #[error("interval [{lo}, {hi}] contains no real number")]
    Unbounded { lo: f64, hi: f64 },

    /// The divisor contains zero, so the quotient is not a single interval.
    ///
    /// Use the extended division on [`IntervalSet`](crate::IntervalSet) to
    /// obtain the (up to two) pieces instead.
    #[error("divisor contains zero; the quotient is not a single interval")]
    DivisionByZeroAmbiguous,

    /// The interval lies entirely outside the domain of the function.
    #[error("interval [{lo}, {hi}] lies outside the domain of {function}")]
    OutOfDomain {
        function: &'static str,
        lo: f64,
        hi: f64,
    },
}

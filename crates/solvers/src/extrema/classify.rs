//! Classification policies for critical points.

use enclose_core::{Derivatives, Interval};

use super::{Extremum, Location};

/// Decides whether a critical point is a minimum, a maximum, or neither.
///
/// Interior points are handed over as the enclosure returned by the Newton
/// solver. Boundary points are first judged by the sign of `f'` at the
/// endpoint; only a stationary endpoint falls back to [`classify`].
///
/// [`classify`]: Classify::classify
pub trait Classify {
    /// Classifies a stationary point enclosed by `enclosure`.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if a derivative cannot be evaluated.
    fn classify<D: Derivatives>(
        &self,
        derivatives: &D,
        enclosure: Interval,
    ) -> Result<Extremum, D::Error>;

    /// Classifies a domain endpoint at `x`.
    ///
    /// Entering the domain downhill makes the left endpoint a maximum, and
    /// leaving it uphill makes the right endpoint a maximum, with the
    /// opposite slopes giving minima. When `f'` encloses zero at `x` the
    /// endpoint is stationary and [`classify`](Classify::classify) decides.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if a derivative cannot be evaluated.
    fn classify_boundary<D: Derivatives>(
        &self,
        derivatives: &D,
        x: f64,
        location: Location,
    ) -> Result<Extremum, D::Error> {
        let at = Interval::point(x);
        let slope = Sign::of(derivatives.first(at)?);

        match (location, slope) {
            (Location::LeftBoundary, Some(Sign::Negative))
            | (Location::RightBoundary, Some(Sign::Positive)) => Ok(Extremum::Maximum),
            (Location::LeftBoundary, Some(Sign::Positive))
            | (Location::RightBoundary, Some(Sign::Negative)) => Ok(Extremum::Minimum),
            _ => self.classify(derivatives, at),
        }
    }
}

/// Strict sign of an interval: touching zero is no sign at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Positive,
    Negative,
}

impl Sign {
    fn of(x: Interval) -> Option<Self> {
        if x.is_positive() {
            Some(Self::Positive)
        } else if x.is_negative() {
            Some(Self::Negative)
        } else {
            None
        }
    }

    /// The extremum implied by this sign of an even-order derivative.
    fn extremum(self) -> Extremum {
        match self {
            Self::Positive => Extremum::Minimum,
            Self::Negative => Extremum::Maximum,
        }
    }
}

/// Classifies by the sign of `f''` over the enclosure.
///
/// A positive enclosure gives a minimum, a negative one a maximum, and one
/// that touches zero gives [`Extremum::Unknown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SecondDerivativeTest;

impl Classify for SecondDerivativeTest {
    fn classify<D: Derivatives>(
        &self,
        derivatives: &D,
        enclosure: Interval,
    ) -> Result<Extremum, D::Error> {
        let curvature = derivatives.second(enclosure)?;
        Ok(Sign::of(curvature).map_or(Extremum::Unknown, Sign::extremum))
    }
}

/// Escalates through higher derivatives until one has a definite sign.
///
/// The first order `k >= 2` whose enclosure excludes zero decides. An even
/// `k` gives a minimum or maximum by sign; an odd `k` means the point is an
/// inflection, reported as [`Extremum::Unknown`]. Orders past `max_order`,
/// or orders the provider does not supply, also give `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HigherOrderTest {
    max_order: usize,
}

impl HigherOrderTest {
    /// Creates a test that tries derivative orders `2..=max_order`.
    #[must_use]
    pub fn new(max_order: usize) -> Self {
        Self { max_order }
    }

    #[must_use]
    pub fn max_order(&self) -> usize {
        self.max_order
    }
}

impl Default for HigherOrderTest {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Classify for HigherOrderTest {
    fn classify<D: Derivatives>(
        &self,
        derivatives: &D,
        enclosure: Interval,
    ) -> Result<Extremum, D::Error> {
        for order in 2..=self.max_order {
            let Some(derivative) = derivatives.nth(order, enclosure)? else {
                break;
            };
            match Sign::of(derivative) {
                Some(sign) if order % 2 == 0 => return Ok(sign.extremum()),
                Some(_) => return Ok(Extremum::Unknown),
                None => {}
            }
        }
        Ok(Extremum::Unknown)
    }
}

/// Classifies by the change of sign of `f'` across the enclosure.
///
/// `f'` is enclosed on a probe just left and just right of the enclosure,
/// each as wide as the enclosure (at least a small relative width).
/// Negative then positive gives a minimum, positive then negative a maximum,
/// anything else [`Extremum::Unknown`]. This assumes no other zero of `f'`
/// lies within the probes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstDerivativeTest;

impl FirstDerivativeTest {
    const MIN_REACH: f64 = 1e-8;
}

impl Classify for FirstDerivativeTest {
    fn classify<D: Derivatives>(
        &self,
        derivatives: &D,
        enclosure: Interval,
    ) -> Result<Extremum, D::Error> {
        let reach = enclosure
            .width()
            .max(Self::MIN_REACH * enclosure.mag().max(1.0));
        let (lo, hi) = (enclosure.lo().next_down(), enclosure.hi().next_up());
        let left = Interval::point(lo - reach).hull(&Interval::point(lo));
        let right = Interval::point(hi).hull(&Interval::point(hi + reach));

        let before = Sign::of(derivatives.first(left)?);
        let after = Sign::of(derivatives.first(right)?);

        Ok(match (before, after) {
            (Some(Sign::Negative), Some(Sign::Positive)) => Extremum::Minimum,
            (Some(Sign::Positive), Some(Sign::Negative)) => Extremum::Maximum,
            _ => Extremum::Unknown,
        })
    }
}

/// Leaves every point, endpoints included, as [`Extremum::Unknown`].
///
/// Use this when only the locations of the critical points matter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unclassified;

impl Classify for Unclassified {
    fn classify<D: Derivatives>(
        &self,
        _derivatives: &D,
        _enclosure: Interval,
    ) -> Result<Extremum, D::Error> {
        Ok(Extremum::Unknown)
    }

    fn classify_boundary<D: Derivatives>(
        &self,
        _derivatives: &D,
        _x: f64,
        _location: Location,
    ) -> Result<Extremum, D::Error> {
        Ok(Extremum::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use enclose_core::derivatives;

    use super::*;

    fn iv(lo: f64, hi: f64) -> Interval {
        Interval::new(lo, hi).expect("valid interval")
    }

    /// f(x) = x^n with derivatives supplied up to order `n`.
    struct Power(i32);

    impl Derivatives for Power {
        type Error = Infallible;

        fn first(&self, x: Interval) -> Result<Interval, Self::Error> {
            Ok(self.nth(1, x)?.unwrap_or(Interval::ENTIRE))
        }

        fn second(&self, x: Interval) -> Result<Interval, Self::Error> {
            Ok(self.nth(2, x)?.unwrap_or(Interval::ENTIRE))
        }

        fn nth(&self, order: usize, x: Interval) -> Result<Option<Interval>, Self::Error> {
            let Ok(order) = i32::try_from(order) else {
                return Ok(Some(Interval::ZERO));
            };
            if order > self.0 {
                return Ok(Some(Interval::ZERO));
            }
            let coefficient: f64 = (self.0 - order + 1..=self.0).map(f64::from).product();
            let power = x.powi(self.0 - order).unwrap_or(Interval::ENTIRE);
            Ok(Some(coefficient * power))
        }
    }

    #[test]
    fn second_derivative_signs() {
        let upward = derivatives(|x| 2.0 * x, |_| Interval::point(2.0));
        let downward = derivatives(|x| -2.0 * x, |_| Interval::point(-2.0));
        let flat = derivatives(|x| x, |_| iv(-1.0, 0.0));
        let enclosure = iv(-1e-9, 1e-9);

        assert_eq!(
            SecondDerivativeTest.classify(&upward, enclosure),
            Ok(Extremum::Minimum)
        );
        assert_eq!(
            SecondDerivativeTest.classify(&downward, enclosure),
            Ok(Extremum::Maximum)
        );
        assert_eq!(
            SecondDerivativeTest.classify(&flat, enclosure),
            Ok(Extremum::Unknown)
        );
    }

    #[test]
    fn higher_order_uses_parity() {
        let at_zero = iv(-1e-6, 1e-6);
        let test = HigherOrderTest::default();

        assert_eq!(test.classify(&Power(4), at_zero), Ok(Extremum::Minimum));
        assert_eq!(test.classify(&Power(3), at_zero), Ok(Extremum::Unknown));
        assert_eq!(test.classify(&Power(6), at_zero), Ok(Extremum::Minimum));
    }

    #[test]
    fn higher_order_respects_budget() {
        let at_zero = iv(-1e-6, 1e-6);

        assert_eq!(
            HigherOrderTest::new(5).classify(&Power(6), at_zero),
            Ok(Extremum::Unknown)
        );
        assert_eq!(
            HigherOrderTest::new(6).classify(&Power(6), at_zero),
            Ok(Extremum::Minimum)
        );
    }

    #[test]
    fn higher_order_stops_when_provider_runs_out() {
        // Only f' and f'' are supplied; f'' touches zero.
        let provider = derivatives(
            |x: Interval| 4.0 * x.powi(3).unwrap_or(Interval::ENTIRE),
            |x: Interval| 12.0 * x.powi(2).unwrap_or(Interval::ENTIRE),
        );

        assert_eq!(
            HigherOrderTest::default().classify(&provider, iv(-1e-6, 1e-6)),
            Ok(Extremum::Unknown)
        );
    }

    #[test]
    fn first_derivative_sign_change() {
        let parabola = derivatives(|x| 2.0 * x, |_| Interval::point(2.0));
        let cubic = derivatives(
            |x: Interval| 3.0 * x.powi(2).unwrap_or(Interval::ENTIRE),
            |x| 6.0 * x,
        );

        assert_eq!(
            FirstDerivativeTest.classify(&parabola, Interval::ZERO),
            Ok(Extremum::Minimum)
        );
        assert_eq!(
            FirstDerivativeTest.classify(&parabola, iv(-1e-3, 1e-3)),
            Ok(Extremum::Minimum)
        );
        assert_eq!(
            FirstDerivativeTest.classify(&cubic, Interval::ZERO),
            Ok(Extremum::Unknown)
        );
    }

    #[test]
    fn boundaries_follow_the_slope() {
        // f(x) = x² on [-2, 2]: both endpoints are maxima.
        let parabola = derivatives(|x| 2.0 * x, |_| Interval::point(2.0));
        let test = SecondDerivativeTest;

        assert_eq!(
            test.classify_boundary(&parabola, -2.0, Location::LeftBoundary),
            Ok(Extremum::Maximum)
        );
        assert_eq!(
            test.classify_boundary(&parabola, 2.0, Location::RightBoundary),
            Ok(Extremum::Maximum)
        );
        assert_eq!(
            test.classify_boundary(&parabola, 1.0, Location::LeftBoundary),
            Ok(Extremum::Minimum)
        );
        assert_eq!(
            test.classify_boundary(&parabola, -1.0, Location::RightBoundary),
            Ok(Extremum::Minimum)
        );
    }

    #[test]
    fn stationary_boundary_falls_back_to_the_interior_test() {
        let parabola = derivatives(|x| 2.0 * x, |_| Interval::point(2.0));

        assert_eq!(
            SecondDerivativeTest.classify_boundary(&parabola, 0.0, Location::LeftBoundary),
            Ok(Extremum::Minimum)
        );
        assert_eq!(
            Unclassified.classify_boundary(&parabola, -2.0, Location::LeftBoundary),
            Ok(Extremum::Unknown)
        );
    }
}

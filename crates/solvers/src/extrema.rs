//! Classification of critical points.
//!
//! [`find`] runs the interval Newton solver on `f'`, then labels every
//! enclosure it returns, and both domain endpoints, as a minimum, maximum or
//! unknown. How interior points are judged is up to the [`Classify`] policy:
//!
//! - [`SecondDerivativeTest`] — sign of `f''` over the enclosure
//! - [`HigherOrderTest`] — escalates through `f''`, `f'''`, ... by parity
//! - [`FirstDerivativeTest`] — sign change of `f'` across the enclosure
//! - [`Unclassified`] — locations only
//!
//! [`global_minimum`] reduces the labelled points to the lowest one.

mod classify;
mod error;
mod minimum;
mod point;
mod points;


pub use classify::{
    Classify, FirstDerivativeTest, HigherOrderTest, SecondDerivativeTest, Unclassified,
};
pub use error::Error;
pub use minimum::GlobalMinimum;
pub use point::{CriticalPoint, Extremum, Location};
pub use points::CriticalPoints;

use enclose_core::{Derivatives, Interval, Objective, Observer};

use crate::newton::{self, Action, Config, Event};

/// Finds and classifies the critical points of `f` on `domain`.
///
/// The interior points are the enclosures of the zeros of `f'` found by
/// [`newton::solve`], which receives the observer. The result always lists
/// the left endpoint first and the right endpoint last, whatever the solver
/// status.
///
/// # Errors
///
/// Returns an error if the domain is invalid or a derivative fails.
pub fn find<D, C, Obs>(
    derivatives: &D,
    domain: Interval,
    config: &Config,
    classifier: &C,
    observer: Obs,
) -> Result<CriticalPoints, Error>
where
    D: Derivatives,
    C: Classify,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let solution = newton::solve(derivatives, domain, config, observer)?;

    let mut points = Vec::with_capacity(solution.enclosures.len() + 2);
    points.push(boundary(derivatives, classifier, domain.lo(), Location::LeftBoundary)?);
    for &enclosure in &solution.enclosures {
        let classification = classifier
            .classify(derivatives, enclosure)
            .map_err(Error::derivative)?;
        points.push(CriticalPoint::new(
            enclosure,
            classification,
            Location::Interior,
        ));
    }
    points.push(boundary(derivatives, classifier, domain.hi(), Location::RightBoundary)?);

    Ok(CriticalPoints {
        status: solution.status,
        points,
        iters: solution.iters,
    })
}

/// Finds and classifies the critical points without observer support.
///
/// This is a convenience wrapper around [`find`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the domain is invalid or a derivative fails.
pub fn find_unobserved<D, C>(
    derivatives: &D,
    domain: Interval,
    config: &Config,
    classifier: &C,
) -> Result<CriticalPoints, Error>
where
    D: Derivatives,
    C: Classify,
{
    find(derivatives, domain, config, classifier, ())
}

/// Finds the lowest point of `f` on `domain`.
///
/// Candidates are the domain endpoints and the interior critical points,
/// classified with [`SecondDerivativeTest`]. See
/// [`CriticalPoints::lowest`] for the ranking rule.
///
/// # Errors
///
/// Returns an error if the domain is invalid, or if a derivative or the
/// objective fails.
pub fn global_minimum<F>(
    function: &F,
    domain: Interval,
    config: &Config,
) -> Result<GlobalMinimum, Error>
where
    F: Derivatives + Objective,
{
    find_unobserved(function, domain, config, &SecondDerivativeTest)?.lowest(function)
}

fn boundary<D: Derivatives, C: Classify>(
    derivatives: &D,
    classifier: &C,
    x: f64,
    location: Location,
) -> Result<CriticalPoint, Error> {
    let classification = classifier
        .classify_boundary(derivatives, x, location)
        .map_err(Error::derivative)?;
    Ok(CriticalPoint::new(
        Interval::point(x),
        classification,
        location,
    ))
}

use enclose_core::{Derivatives, Interval, IntervalSet};

use super::{Config, Error, Event};

/// The outcome of one Newton step on a single part.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Step {
    Contracted(IntervalSet),
    Excluded,
    Isolated {
        candidate: Interval,
        rest: IntervalSet,
    },
    Stalled,
}

impl Step {
    /// Builds the observer event for this step.
    pub(super) fn event(&self, iter: usize, part: Interval) -> Event<'_> {
        match self {
            Self::Contracted(pieces) => Event::Contracted { iter, part, pieces },
            Self::Excluded => Event::Excluded { iter, part },
            Self::Isolated { candidate, rest } => Event::Isolated {
                iter,
                part,
                candidate: *candidate,
                rest,
            },
            Self::Stalled => Event::Stalled { iter, part },
        }
    }
}

/// Applies one interval Newton step to `part`.
///
/// With `m` the midpoint, the step intersects `part` with
/// `N = m - f'(m) / f''(part)`. When `f'(m)` is within `residual_tol` of zero
/// and `f''(part)` contains zero, the part is split around `m` instead (see
/// [`isolate`]).
pub(super) fn step<D: Derivatives>(
    derivatives: &D,
    part: Interval,
    config: &Config,
) -> Result<Step, Error> {
    let mid = part.midpoint();
    let residual = derivatives
        .first(Interval::point(mid))
        .map_err(Error::derivative)?;
    let slope = derivatives.second(part).map_err(Error::derivative)?;

    if residual.mag() <= config.residual_tol() && slope.contains_zero() {
        return isolate(derivatives, part, mid, residual, config);
    }

    let pieces = contract(part, mid, residual, slope);
    Ok(if pieces.is_empty() {
        Step::Excluded
    } else if pieces.parts() == [part] {
        Step::Stalled
    } else {
        Step::Contracted(pieces)
    })
}

/// Sets aside `[m - e/4, m + e/4]` as a candidate enclosure and contracts
/// the two sides separately.
///
/// Each side is contracted with `f''` taken over the half between its outer
/// bound and `m`, so the mean value form stays valid although `m` lies
/// outside the side. The candidate is already within tolerance, and the sides
/// shrink by at least the candidate's width, so the part always changes.
fn isolate<D: Derivatives>(
    derivatives: &D,
    part: Interval,
    mid: f64,
    residual: Interval,
    config: &Config,
) -> Result<Step, Error> {
    let quarter = config.tolerance() / 4.0;
    let gap = Interval::point(mid - quarter).hull(&Interval::point(mid + quarter));
    let candidate = part.intersect(&gap).unwrap_or(part);
    if candidate == part {
        return Ok(Step::Stalled);
    }

    let mut rest = IntervalSet::empty();
    let sides = [
        (part.lo(), candidate.lo()),
        (candidate.hi(), part.hi()),
    ];
    for (lo, hi) in sides {
        if lo >= hi {
            continue;
        }
        let side = Interval::point(lo).hull(&Interval::point(hi));
        let half = side.hull(&Interval::point(mid));
        let slope = derivatives.second(half).map_err(Error::derivative)?;
        rest.union(&contract(side, mid, residual, slope));
    }

    Ok(Step::Isolated { candidate, rest })
}

/// Intersects `part` with the Newton image `mid - residual / slope`.
///
/// When both `residual` and `slope` contain zero the image is the whole real
/// line, so nothing is removed.
fn contract(part: Interval, mid: f64, residual: Interval, slope: Interval) -> IntervalSet {
    let mut pieces = IntervalSet::from(part);
    if residual.contains_zero() && slope.contains_zero() {
        return pieces;
    }

    let image = Interval::point(mid) - residual / slope;
    pieces.intersect(&image);
    pieces
}

#[cfg(test)]
mod tests {
    use enclose_core::derivatives;

    use super::*;

    fn iv(lo: f64, hi: f64) -> Interval {
        Interval::new(lo, hi).expect("valid interval")
    }

    #[test]
    fn quadratic_contracts_to_its_vertex_in_one_step() {
        // f' = 2x - 1, f'' = 2.
        let provider = derivatives(|x| 2.0 * x - 1.0, |_| Interval::point(2.0));
        let step = step(&provider, iv(-2.0, 2.0), &Config::default()).unwrap();

        assert_eq!(step, Step::Contracted(IntervalSet::from(Interval::point(0.5))));
    }

    #[test]
    fn constant_derivative_is_excluded() {
        let provider = derivatives(|_| Interval::ONE, |_| Interval::ZERO);
        let step = step(&provider, iv(0.0, 1.0), &Config::default()).unwrap();

        assert_eq!(step, Step::Excluded);
    }

    #[test]
    fn vanishing_residual_with_flat_slope_isolates() {
        // f' = 3x², f'' = 6x, triple zero of f at the origin.
        let provider = derivatives(
            |x: Interval| 3.0 * x.powi(2).unwrap_or(Interval::ENTIRE),
            |x| 6.0 * x,
        );
        let config = Config::with_tolerance(1e-3).unwrap();

        let Step::Isolated { candidate, rest } = step(&provider, iv(-1.0, 1.0), &config).unwrap()
        else {
            panic!("expected isolation");
        };

        assert!(candidate.contains(0.0));
        assert!(candidate.width() <= config.tolerance());
        assert!(!rest.contains(0.0));
        assert_eq!(rest.len(), 2);
        assert_eq!(rest.hull(), Some(iv(-1.0, 1.0)));
    }

    #[test]
    fn undecided_residual_over_zero_slope_stalls() {
        let provider = derivatives(|_| iv(-1.0, 1.0), |_| Interval::ENTIRE);
        let step = step(&provider, iv(0.0, 1.0), &Config::default()).unwrap();

        assert_eq!(step, Step::Stalled);
    }

    #[test]
    fn straddling_slope_splits_the_part() {
        // f' = x² - 1 on [-2, 2]: m = 0, f'(0) = -1, f'' = 2x = [-4, 4].
        let provider = derivatives(
            |x: Interval| x.powi(2).unwrap_or(Interval::ENTIRE) - 1.0,
            |x| 2.0 * x,
        );
        let Step::Contracted(pieces) = step(&provider, iv(-2.0, 2.0), &Config::default()).unwrap()
        else {
            panic!("expected contraction");
        };

        assert_eq!(pieces.parts(), &[iv(-2.0, -0.25), iv(0.25, 2.0)]);
    }
}

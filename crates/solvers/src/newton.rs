//! Interval Newton isolation of stationary points.
//!
//! # Algorithm
//!
//! The solver looks for the zeros of `f'` on a finite domain. It keeps a
//! working set of disjoint parts, starting with the whole domain. In each
//! pass, every part `X` wider than the tolerance is replaced by its
//! intersection with the Newton image
//!
//! ```text
//! N(X) = m - f'(m) / f''(X),    m = midpoint(X)
//! ```
//!
//! Division uses the extended rule, so when `f''(X)` contains zero the image
//! may be two unbounded pieces and `X` splits in two. An empty intersection
//! proves that `X` holds no zero of `f'`, and the part is dropped.
//!
//! If `f'(m)` is within `residual_tol` of zero while `f''(X)` contains zero,
//! the plain step cannot make progress. The part is split instead: a
//! candidate enclosure of width `e/2` around `m` is set aside, and the two
//! sides are contracted on their own.
//!
//! # Guarantees
//!
//! Every zero of `f'` in the domain lies in the returned enclosures,
//! whichever [`Status`] the solver finishes with. On convergence, parts over
//! which `f'` provably does not vanish are removed, and every remaining
//! enclosure is no wider than the tolerance. A set-aside candidate that ends
//! up touching another enclosure is merged with it and processed again.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per unsettled part and pass:
//!
//! - [`Event::Contracted`] — the part shrank or split
//! - [`Event::Excluded`] — the part holds no zero and was dropped
//! - [`Event::Isolated`] — a candidate multiple zero was set aside
//! - [`Event::Stalled`] — the part was left unchanged
//!
//! Observers can return [`Action::StopEarly`] to halt after the current part.

mod action;
mod config;
mod error;
mod event;
mod solution;
mod state;
mod step;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::{DomainError, Error};
pub use event::Event;
pub use solution::{Solution, Status};

use enclose_core::{Derivatives, Interval, Observer};

use state::{Pass, State};

/// Encloses the zeros of `f'` in `domain` using interval Newton iteration.
///
/// The observer receives an [`Event`] for each part processed in each pass.
/// See the [module docs](self) for the algorithm and observer actions.
///
/// # Errors
///
/// Returns an error if the domain is unbounded or has zero width, or if the
/// derivative provider fails.
pub fn solve<D, Obs>(
    derivatives: &D,
    domain: Interval,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    D: Derivatives,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    validate_domain(domain)?;
    let mut state = State::new(domain);

    let mut iters = 0;
    while !state.settle(derivatives, config)? {
        if iters == config.max_iters() {
            return Ok(state.into_solution(Status::MaxIters, iters));
        }
        iters += 1;

        match state.pass(derivatives, config, iters, &mut observer)? {
            Pass::Progressed => {}
            Pass::Stalled => return Ok(state.into_solution(Status::NoConvergence, iters)),
            Pass::StopEarly => return Ok(state.into_solution(Status::StoppedByObserver, iters)),
        }
    }

    Ok(state.finish(iters))
}

/// Encloses the zeros of `f'` in `domain` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the domain is unbounded or has zero width, or if the
/// derivative provider fails.
pub fn solve_unobserved<D: Derivatives>(
    derivatives: &D,
    domain: Interval,
    config: &Config,
) -> Result<Solution, Error> {
    solve(derivatives, domain, config, ())
}

/// Checks that the starting domain is finite and has positive width.
fn validate_domain(domain: Interval) -> Result<(), DomainError> {
    if !domain.lo().is_finite() || !domain.hi().is_finite() {
        return Err(DomainError::NonFinite);
    }
    if domain.is_point() {
        return Err(DomainError::ZeroWidth);
    }
    Ok(())
}

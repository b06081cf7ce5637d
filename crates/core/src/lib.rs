//! Core types for verified stationary-point search.
//!
//! This crate defines the pieces the solvers and observers build on:
//!
//! - [`Interval`] — a closed real range with outward-rounded arithmetic and
//!   elementary functions
//! - [`IntervalSet`] — a sorted union of disjoint intervals, the carrier for
//!   extended division and for the solvers' working sets
//! - [`Derivatives`], [`Objective`] — provider traits through which callers
//!   hand in sound enclosures of `f`, `f'`, `f''` and higher derivatives
//! - [`Observer`] — receives solver events and optionally returns control
//!   actions

mod function;
mod interval;
mod interval_set;
mod observer;

#[cfg(test)]
mod proptests;

pub use function::{
    Derivatives, FnDerivatives, FnFunction, Objective, derivatives, function,
};
pub use interval::{Interval, IntervalError};
pub use interval_set::IntervalSet;
pub use observer::Observer;

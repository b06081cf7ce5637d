//! Capability traits for generic observers.
//!
//! These traits abstract over solver event and action types, so an observer
//! can be written once against the capabilities it needs.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events that know which pass produced them
//! - [`HasPart`] — events about one part of a working set
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use enclose_core::Observer;
//! use enclose_observers::traits::{CanStopEarly, HasPart};
//!
//! /// Stops once some part has been narrowed below `width`.
//! struct NarrowEnough {
//!     width: f64,
//! }
//!
//! impl<E: HasPart, A: CanStopEarly> Observer<E, A> for NarrowEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.part().width() < self.width).then(A::stop_early)
//!     }
//! }
//! ```

use enclose_core::Interval;
use enclose_solvers::newton;

/// An event produced during a numbered pass.
pub trait HasIteration {
    /// Returns the pass number, starting at one.
    fn iter(&self) -> usize;
}

/// An event about a single part of a working set.
pub trait HasPart {
    /// Returns the part the event is about.
    fn part(&self) -> Interval;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasIteration for newton::Event<'_> {
    fn iter(&self) -> usize {
        newton::Event::iter(self)
    }
}

impl HasPart for newton::Event<'_> {
    fn part(&self) -> Interval {
        newton::Event::part(self)
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

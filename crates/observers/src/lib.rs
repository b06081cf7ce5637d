//! Reusable observers for the enclose solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits
//! for the interval Newton solver and the critical-point search built on it.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasIteration`], [`HasPart`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TracingObserver`] — emits one `tracing` event per solver event
//! - [`Recorder`] — keeps an owned [`Record`] of every solver event
//!
//! [`Observer`]: enclose_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasPart`]: traits::HasPart
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod recorder;
mod trace;

pub use recorder::{Outcome, Record, Recorder};
pub use trace::TracingObserver;

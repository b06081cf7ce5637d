//! Verified stationary-point solvers.
//!
//! # Modules
//!
//! - [`newton`] — interval Newton isolation of the zeros of `f'`
//! - [`extrema`] — classification of the isolated zeros and domain endpoints
//!   as minima, maxima or unknown, plus the global-minimum reduction

pub mod extrema;
pub mod newton;

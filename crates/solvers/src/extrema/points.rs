use crate::newton::Status;

use super::{CriticalPoint, Extremum};

/// The outcome of a critical-point search.
#[derive(Debug, Clone, PartialEq)]
pub struct CriticalPoints {
    /// How the underlying Newton solve finished.
    pub status: Status,

    /// Left endpoint, interior points in ascending order, right endpoint.
    pub points: Vec<CriticalPoint>,

    /// Number of Newton passes.
    pub iters: usize,
}

impl CriticalPoints {
    /// Returns true if the interior points were isolated within tolerance.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the interior points, without the domain endpoints.
    pub fn interior(&self) -> impl Iterator<Item = &CriticalPoint> {
        self.points.iter().filter(|point| !point.is_boundary())
    }

    /// Returns every point classified as a minimum, endpoints included.
    pub fn minima(&self) -> impl Iterator<Item = &CriticalPoint> {
        self.of_kind(Extremum::Minimum)
    }

    /// Returns every point classified as a maximum, endpoints included.
    pub fn maxima(&self) -> impl Iterator<Item = &CriticalPoint> {
        self.of_kind(Extremum::Maximum)
    }

    /// Returns the first point whose representative is within `tol` of `x`.
    #[must_use]
    pub fn point_near(&self, x: f64, tol: f64) -> Option<&CriticalPoint> {
        self.points
            .iter()
            .find(|point| (point.representative() - x).abs() <= tol)
    }

    fn of_kind(&self, kind: Extremum) -> impl Iterator<Item = &CriticalPoint> {
        self.points
            .iter()
            .filter(move |point| point.classification() == kind)
    }
}

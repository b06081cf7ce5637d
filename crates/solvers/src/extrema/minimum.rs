use enclose_core::{Interval, Objective};

use crate::newton::Status;

use super::{CriticalPoint, CriticalPoints, Error};

/// The lowest critical point of a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalMinimum {
    /// The winning critical point.
    pub point: CriticalPoint,

    /// Enclosure of `f` at the point's representative.
    pub value: Interval,

    /// How the underlying Newton solve finished.
    ///
    /// Unless this is [`Status::Converged`], interior candidates may be
    /// coarse and the reduction is only as good as their representatives.
    pub status: Status,
}

impl CriticalPoints {
    /// Picks the point with the lowest objective.
    ///
    /// Each representative is evaluated as a point interval and candidates
    /// are ranked by the upper bound of that enclosure, so the winner's value
    /// is guaranteed to be no larger than its reported bound. Ties keep the
    /// leftmost point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Objective`] if the objective fails, or
    /// [`Error::NoCandidates`] if there are no points at all.
    pub fn lowest<O: Objective>(&self, objective: &O) -> Result<GlobalMinimum, Error> {
        let mut best: Option<(CriticalPoint, Interval)> = None;

        for &point in &self.points {
            let value = objective
                .value(Interval::point(point.representative()))
                .map_err(Error::objective)?;
            if best.is_none_or(|(_, lowest)| value.hi() < lowest.hi()) {
                best = Some((point, value));
            }
        }

        let (point, value) = best.ok_or(Error::NoCandidates)?;
        Ok(GlobalMinimum {
            point,
            value,
            status: self.status,
        })
    }
}

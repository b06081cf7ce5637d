use enclose_core::IntervalSet;

/// Indicates how the interval Newton solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Every enclosure is no wider than the tolerance.
    Converged,

    /// The working set became empty: `f'` provably has no zero in the domain.
    NoRoot,

    /// A full pass left every part unchanged.
    ///
    /// Either no zero is enclosed or the Newton operator cannot contract the
    /// parts (non-smooth `f'`, degenerate derivative enclosures). The
    /// enclosures are returned as they were.
    NoConvergence,

    /// Reached the pass limit before converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an interval Newton solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Enclosures of the zeros of `f'`, in ascending order.
    ///
    /// Every zero of `f'` in the domain lies in one of these parts, whatever
    /// the status. Only for [`Status::Converged`] are all parts no wider than
    /// the tolerance.
    pub enclosures: IntervalSet,

    /// Number of passes when the solver finished.
    pub iters: usize,
}

impl Solution {
    /// Returns true if the solver isolated at least one zero within tolerance.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}

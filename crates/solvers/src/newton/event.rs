use enclose_core::{Interval, IntervalSet};

/// Events emitted by the interval Newton solver.
///
/// One event is emitted for each part of the working set that is still wider
/// than the tolerance when a pass reaches it. Parts already within tolerance
/// are carried over silently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a> {
    /// The Newton step shrank `part` (possibly into several pieces).
    Contracted {
        /// The pass number, starting at one.
        iter: usize,

        /// The part before the step.
        part: Interval,

        /// What remains of `part` after intersecting with the Newton image.
        pieces: &'a IntervalSet,
    },

    /// The Newton image missed `part` entirely, so it holds no zero of `f'`.
    Excluded {
        /// The pass number, starting at one.
        iter: usize,

        /// The discarded part.
        part: Interval,
    },

    /// `f'` vanished at the midpoint while `f''` enclosed zero.
    ///
    /// A candidate multiple zero around the midpoint was set aside as an
    /// enclosure, and the two sides were contracted on their own.
    Isolated {
        /// The pass number, starting at one.
        iter: usize,

        /// The part before the step.
        part: Interval,

        /// The set-aside enclosure around the midpoint.
        candidate: Interval,

        /// What remains of the two sides of `part`.
        rest: &'a IntervalSet,
    },

    /// The Newton step left `part` unchanged.
    Stalled {
        /// The pass number, starting at one.
        iter: usize,

        /// The unchanged part.
        part: Interval,
    },
}

impl Event<'_> {
    /// Returns the pass number of the event.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Contracted { iter, .. }
            | Self::Excluded { iter, .. }
            | Self::Isolated { iter, .. }
            | Self::Stalled { iter, .. } => *iter,
        }
    }

    /// Returns the part the event is about, as it was before the step.
    #[must_use]
    pub fn part(&self) -> Interval {
        match self {
            Self::Contracted { part, .. }
            | Self::Excluded { part, .. }
            | Self::Isolated { part, .. }
            | Self::Stalled { part, .. } => *part,
        }
    }
}

use enclose_core::{Derivatives, Interval, IntervalSet, Observer};

use super::{
    Action, Config, Error, Event, Solution, Status,
    step::{Step, step},
};

/// How a single pass over the working set ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Pass {
    /// At least one part changed.
    Progressed,

    /// Every processed part was left unchanged.
    Stalled,

    /// An observer asked to stop.
    StopEarly,
}

/// The solver's working set and the enclosures set aside so far.
pub(super) struct State {
    working: IntervalSet,
    isolated: IntervalSet,
}

impl State {
    pub(super) fn new(domain: Interval) -> Self {
        Self {
            working: IntervalSet::from(domain),
            isolated: IntervalSet::empty(),
        }
    }

    /// Returns true once every enclosure is within the tolerance.
    ///
    /// As soon as the working set is narrow enough, parts and set-aside
    /// candidates over which `f'` provably does not vanish are dropped.
    /// Candidates that touch a remaining working part, or that merged into
    /// something wider than the tolerance, go back into the working set so
    /// the solve keeps going.
    pub(super) fn settle<D: Derivatives>(
        &mut self,
        derivatives: &D,
        config: &Config,
    ) -> Result<bool, Error> {
        if self.working.max_width() > config.tolerance() {
            return Ok(false);
        }

        self.working = exclude(derivatives, &self.working)?;
        let candidates = exclude(derivatives, &self.isolated)?;

        let mut apart = IntervalSet::empty();
        for candidate in candidates {
            if self.working.iter().any(|part| part.overlaps(&candidate)) {
                self.working.append(candidate);
            } else {
                apart.append(candidate);
            }
        }

        // Touching candidates merge with each other too.
        self.isolated = IntervalSet::empty();
        for candidate in apart {
            if candidate.width() > config.tolerance() {
                self.working.append(candidate);
            } else {
                self.isolated.append(candidate);
            }
        }

        Ok(self.working.max_width() <= config.tolerance())
    }

    /// Applies one Newton step to every unsettled part of the working set.
    ///
    /// If the observer stops the pass, the parts not yet visited are kept
    /// as they are.
    pub(super) fn pass<D, Obs>(
        &mut self,
        derivatives: &D,
        config: &Config,
        iter: usize,
        observer: &mut Obs,
    ) -> Result<Pass, Error>
    where
        D: Derivatives,
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        let parts = std::mem::take(&mut self.working).into_vec();
        let mut next = IntervalSet::empty();
        let mut progressed = false;

        for (index, &part) in parts.iter().enumerate() {
            if part.width() <= config.tolerance() {
                next.append(part);
                continue;
            }

            let step = step(derivatives, part, config)?;
            let action = observer.observe(&step.event(iter, part));

            match step {
                Step::Contracted(pieces) => {
                    next.union(&pieces);
                    progressed = true;
                }
                Step::Excluded => progressed = true,
                Step::Isolated { candidate, rest } => {
                    self.isolated.append(candidate);
                    next.union(&rest);
                    progressed = true;
                }
                Step::Stalled => next.append(part),
            }

            if action == Some(Action::StopEarly) {
                for &unvisited in &parts[index + 1..] {
                    next.append(unvisited);
                }
                self.working = next;
                return Ok(Pass::StopEarly);
            }
        }

        self.working = next;
        Ok(if progressed {
            Pass::Progressed
        } else {
            Pass::Stalled
        })
    }

    /// Builds a solution from everything still enclosing a possible zero.
    pub(super) fn into_solution(self, status: Status, iters: usize) -> Solution {
        let mut enclosures = self.working;
        enclosures.union(&self.isolated);
        Solution {
            status,
            enclosures,
            iters,
        }
    }

    /// Finishes a settled solve.
    ///
    /// Reports [`Status::Converged`] if any enclosure survived
    /// [`settle`](Self::settle) and [`Status::NoRoot`] otherwise.
    pub(super) fn finish(self, iters: usize) -> Solution {
        let status = if self.working.is_empty() && self.isolated.is_empty() {
            Status::NoRoot
        } else {
            Status::Converged
        };
        self.into_solution(status, iters)
    }
}

/// Keeps the parts of `set` over which `f'` may vanish.
fn exclude<D: Derivatives>(derivatives: &D, set: &IntervalSet) -> Result<IntervalSet, Error> {
    let mut kept = IntervalSet::empty();
    for &part in set {
        let slope = derivatives.first(part).map_err(Error::derivative)?;
        if slope.contains_zero() {
            kept.append(part);
        }
    }
    Ok(kept)
}

use enclose_core::Observer;
use enclose_solvers::newton::Event;

/// Logs every interval Newton event through [`tracing`].
///
/// Each event becomes a `DEBUG` record under the `enclose::newton` target
/// with `iter`, `part` and `outcome` fields, plus the pieces that remain.
/// The observer never steers the solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<A> Observer<Event<'_>, A> for TracingObserver {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        let iter = event.iter();
        let part = event.part();

        match event {
            Event::Contracted { pieces, .. } => tracing::debug!(
                target: "enclose::newton",
                iter,
                %part,
                outcome = "contracted",
                pieces = %pieces,
                width = pieces.sum_width(),
            ),
            Event::Excluded { .. } => tracing::debug!(
                target: "enclose::newton",
                iter,
                %part,
                outcome = "excluded",
            ),
            Event::Isolated { candidate, rest, .. } => tracing::debug!(
                target: "enclose::newton",
                iter,
                %part,
                outcome = "isolated",
                %candidate,
                rest = %rest,
            ),
            Event::Stalled { .. } => tracing::debug!(
                target: "enclose::newton",
                iter,
                %part,
                outcome = "stalled",
            ),
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use enclose_core::{Interval, derivatives};
    use enclose_solvers::newton::{self, Action, Config, Status};

    use super::*;

    #[test]
    fn never_interrupts_the_solver() {
        let parabola = derivatives(|x| 2.0 * x, |_| Interval::point(2.0));
        let domain = Interval::new(-2.0, 2.0).unwrap();

        let solution =
            newton::solve(&parabola, domain, &Config::default(), TracingObserver::new()).unwrap();

        assert_eq!(solution.status, Status::Converged);
    }

    #[test]
    fn returns_no_action() {
        let part = Interval::new(0.0, 1.0).unwrap();
        let event = Event::Stalled { iter: 3, part };

        let action: Option<Action> = TracingObserver.observe(&event);
        assert_eq!(action, None);
    }
}

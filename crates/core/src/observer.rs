/// Receives solver events and optionally steers the solver.
///
/// Observers let callers log, record, or stop a solve without the solver
/// knowing anything about them. Returning `Some(action)` requests a
/// solver-specific action; `None` lets the solver carry on.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers, and `()` is
/// the no-op observer used by the `*_unobserved` entry points.
pub trait Observer<E, A> {
    /// Observes one event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

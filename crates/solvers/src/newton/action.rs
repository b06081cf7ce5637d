/// Actions an observer can take during interval Newton solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the enclosures found so far.
    ///
    /// Parts not yet processed in the current pass are kept unchanged, so
    /// the returned set still covers every zero of `f'` in the domain.
    StopEarly,
}

use enclose_core::{Interval, IntervalSet, Observer};
use enclose_solvers::newton::Event;

/// What a Newton step did to a part, as an owned value.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Contracted { pieces: IntervalSet },
    Excluded,
    Isolated { candidate: Interval, rest: IntervalSet },
    Stalled,
}

/// An owned copy of one interval Newton event.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub iter: usize,
    pub part: Interval,
    pub outcome: Outcome,
}

impl From<&Event<'_>> for Record {
    fn from(event: &Event<'_>) -> Self {
        let outcome = match event {
            Event::Contracted { pieces, .. } => Outcome::Contracted {
                pieces: (*pieces).clone(),
            },
            Event::Excluded { .. } => Outcome::Excluded,
            Event::Isolated {
                candidate, rest, ..
            } => Outcome::Isolated {
                candidate: *candidate,
                rest: (*rest).clone(),
            },
            Event::Stalled { .. } => Outcome::Stalled,
        };

        Self {
            iter: event.iter(),
            part: event.part(),
            outcome,
        }
    }
}

/// Keeps every interval Newton event for inspection after the solve.
///
/// Pass `&mut recorder` as the observer to read the records afterwards.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    records: Vec<Record>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the records in the order the events were emitted.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Returns the records of a single pass.
    pub fn pass(&self, iter: usize) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(move |record| record.iter == iter)
    }

    /// Returns the number of the last recorded pass, if any.
    #[must_use]
    pub fn passes(&self) -> Option<usize> {
        self.records.last().map(|record| record.iter)
    }
}

impl<A> Observer<Event<'_>, A> for Recorder {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        self.records.push(Record::from(event));
        None
    }
}

impl<A> Observer<Event<'_>, A> for &mut Recorder {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        self.records.push(Record::from(event));
        None
    }
}

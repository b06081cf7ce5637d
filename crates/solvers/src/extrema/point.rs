use std::fmt;

use enclose_core::Interval;

/// The kind of a critical point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extremum {
    Minimum,
    Maximum,
    /// The classifying derivative could not decide, or the point is an
    /// inflection.
    Unknown,
}

impl fmt::Display for Extremum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Minimum => "Minimum",
            Self::Maximum => "Maximum",
            Self::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Where a critical point sits relative to the search domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    LeftBoundary,
    Interior,
    RightBoundary,
}

/// A classified critical point.
///
/// Interior points are enclosures of zeros of `f'`. Boundary points are the
/// domain endpoints as degenerate enclosures.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriticalPoint {
    representative: f64,
    enclosure: Interval,
    classification: Extremum,
    location: Location,
}

impl CriticalPoint {
    /// Creates a critical point represented by the enclosure's midpoint.
    #[must_use]
    pub fn new(enclosure: Interval, classification: Extremum, location: Location) -> Self {
        Self {
            representative: enclosure.midpoint(),
            enclosure,
            classification,
            location,
        }
    }

    /// Returns the midpoint of the enclosure.
    #[must_use]
    pub fn representative(&self) -> f64 {
        self.representative
    }

    #[must_use]
    pub fn enclosure(&self) -> Interval {
        self.enclosure
    }

    #[must_use]
    pub fn classification(&self) -> Extremum {
        self.classification
    }

    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    /// Returns the half-width of the enclosure.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.enclosure.radius()
    }

    /// Returns true for the two domain endpoints.
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        self.location != Location::Interior
    }
}

impl fmt::Display for CriticalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Point {} ± {}, type = {}",
            self.representative,
            self.delta(),
            self.classification
        )
    }
}

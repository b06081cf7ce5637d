//! Unions of disjoint intervals.
//!
//! An [`IntervalSet`] keeps its parts sorted by lower bound with no two parts
//! overlapping or touching. Every constructor and mutator renormalizes, so the
//! invariant holds after any public call. The empty set is a valid value: it
//! means "no enclosure", for example when a region provably has no root.
//!
//! Arithmetic on sets lifts the [`Interval`] operations over the cartesian
//! product of parts. Operations that can split (division, negative powers)
//! or leave a function's domain (`ln`, `sqrt`) never fail here; they return
//! the pieces that remain.

mod ops;

use std::fmt;

use crate::Interval;

/// A normalized union of closed intervals.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Interval>", into = "Vec<Interval>")
)]
pub struct IntervalSet {
    parts: Vec<Interval>,
}

impl IntervalSet {
    /// Creates a normalized set from any collection of intervals.
    #[must_use]
    pub fn new(parts: impl IntoIterator<Item = Interval>) -> Self {
        let mut set = Self {
            parts: parts.into_iter().collect(),
        };
        set.normalize();
        set
    }

    /// Creates the empty set.
    #[must_use]
    pub fn empty() -> Self {
        Self { parts: Vec::new() }
    }

    /// Returns the parts in ascending order.
    #[must_use]
    pub fn parts(&self) -> &[Interval] {
        &self.parts
    }

    /// Returns an iterator over the parts in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.parts.iter()
    }

    /// Returns the number of disjoint parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns true if the set encloses nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Returns true if any part contains `value`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.parts.iter().any(|part| part.contains(value))
    }

    /// Returns the total measure of all parts, rounded up.
    #[must_use]
    pub fn sum_width(&self) -> f64 {
        self.parts
            .iter()
            .fold(0.0, |total, part| crate::interval::round::add(total, part.width()).1)
    }

    /// Returns the width of the widest part, or zero for the empty set.
    #[must_use]
    pub fn max_width(&self) -> f64 {
        self.parts
            .iter()
            .map(Interval::width)
            .fold(0.0, f64::max)
    }

    /// Returns the smallest single interval covering every part.
    #[must_use]
    pub fn hull(&self) -> Option<Interval> {
        let first = self.parts.first()?;
        let last = self.parts.last()?;
        Some(first.hull(last))
    }

    /// Returns the midpoint of each part, in ascending order.
    pub fn midpoints(&self) -> impl Iterator<Item = f64> + '_ {
        self.parts.iter().map(Interval::midpoint)
    }

    /// Adds a single interval.
    pub fn append(&mut self, interval: Interval) {
        self.parts.push(interval);
        self.normalize();
    }

    /// Adds every part of `other`.
    pub fn union(&mut self, other: &Self) {
        self.parts.extend_from_slice(&other.parts);
        self.normalize();
    }

    /// Keeps only the values also covered by `other`.
    ///
    /// Every part of `self` is intersected with every part of `other`.
    pub fn intersect(&mut self, other: &Self) {
        let parts = self
            .parts
            .iter()
            .flat_map(|mine| other.parts.iter().filter_map(|theirs| mine.intersect(theirs)))
            .collect();
        self.parts = parts;
        self.normalize();
    }

    /// Keeps only the values also covered by `interval`.
    pub fn intersect_interval(&mut self, interval: &Interval) {
        self.parts.retain_mut(|part| match part.intersect(interval) {
            Some(common) => {
                *part = common;
                true
            }
            None => false,
        });
        self.normalize();
    }

    /// Returns `1 / x` for every non-zero `x` in the set.
    ///
    /// Parts straddling zero split in two, see [`Interval::recip`].
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.parts.iter().flat_map(|part| part.recip().parts).collect()
    }

    /// Consumes the set and returns its parts.
    #[must_use]
    pub fn into_vec(self) -> Vec<Interval> {
        self.parts
    }

    /// Restores the sorted, disjoint invariant.
    ///
    /// Parts that overlap or touch are merged.
    fn normalize(&mut self) {
        self.parts.sort_by(|a, b| a.lo().total_cmp(&b.lo()));

        let mut merged: Vec<Interval> = Vec::with_capacity(self.parts.len());
        for part in self.parts.drain(..) {
            match merged.last_mut() {
                Some(last) if last.hi() >= part.lo() => *last = last.hull(&part),
                _ => merged.push(part),
            }
        }
        self.parts = merged;
    }
}

impl From<Interval> for IntervalSet {
    fn from(interval: Interval) -> Self {
        Self {
            parts: vec![interval],
        }
    }
}

impl From<Vec<Interval>> for IntervalSet {
    fn from(parts: Vec<Interval>) -> Self {
        Self::new(parts)
    }
}

impl From<IntervalSet> for Vec<Interval> {
    fn from(set: IntervalSet) -> Self {
        set.into_vec()
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<T: IntoIterator<Item = Interval>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

impl IntoIterator for IntervalSet {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.into_iter()
    }
}

impl fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parts.is_empty() {
            return write!(f, "∅");
        }
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, " U ")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

//! Ordered, fixed-length runs of calendar units and periods.

use std::ops::Index;
use std::slice::Iter as SliceIter;
use std::vec::IntoIter as VecIntoIter;

use crate::cal::datetime::LocalDate;
use crate::cal::units::{Year, YearMonth};
use crate::period::TimePeriod;


/// A **sequence** is the finished result of stepping through time: a run of
/// years, months, days, or periods, in the order they were produced.
///
/// Sequences are built all at once, and can’t be changed afterwards. The
/// order is whatever the producing operation says it is: chronological
/// for `Year::until` and `TimePeriod::iterate`, reverse-chronological for
/// `Year::since` and `TimePeriod::iterate_backward`.
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub struct Sequence<T> {
    items: Vec<T>,
}

/// A run of years.
pub type Years = Sequence<Year>;

/// A run of months, each paired with its year.
pub type Months = Sequence<YearMonth>;

/// A run of days.
pub type Days = Sequence<LocalDate>;

/// A run of time periods.
pub type TimePeriods = Sequence<TimePeriod>;

impl<T> Sequence<T> {

    /// Wraps an already-ordered vector.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at the given index, or `None` if it’s past the end.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn iter(&self) -> SliceIter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Returns the same items in the opposite order.
    pub fn reversed(mut self) -> Self {
        self.items.reverse();
        self
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> std::iter::FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = VecIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = SliceIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

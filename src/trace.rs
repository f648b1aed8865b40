//! Per-iteration diagnostic records.
//!
//! A [`Trace`] is produced once per solver call, in iteration order, and is
//! owned by that call's report. Records are only ever appended.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered, append-only sequence of iteration records.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trace<R> {
    records: Vec<R>,
}

impl<R> Trace<R> {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    pub(crate) fn with_capacity(n: usize) -> Self {
        Self { records: Vec::with_capacity(n) }
    }

    pub(crate) fn push(&mut self, record: R) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn last(&self) -> Option<&R> { self.records.last() }
    pub fn first(&self) -> Option<&R> { self.records.first() }
    pub fn as_slice(&self) -> &[R] { &self.records }
    pub fn into_vec(self) -> Vec<R> { self.records }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }
}

impl<R> Default for Trace<R> {
    fn default() -> Self { Self::new() }
}

impl<'a, R> IntoIterator for &'a Trace<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<R> IntoIterator for Trace<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

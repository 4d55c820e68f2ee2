use std::cmp::Ordering;

use ahash::{HashSet, HashSetExt};

use crate::string::StringSequence;

/// An ordered sequence of integers with a chainable transformation API.
///
/// A sequence is never mutated after construction. Every transformation
/// takes `&self` and allocates a fresh backing vector for its result, so
/// two chains branching off the same intermediate sequence cannot observe
/// each other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntegerSequence {
    data: Vec<i64>,
}

impl IntegerSequence {
    /// Wrap an ordered collection of integers, preserving input order
    /// exactly.
    pub fn new(data: Vec<i64>) -> Self {
        Self { data }
    }

    pub fn empty() -> Self {
        Self { data: Vec::new() }
    }

    /// Apply `f` to every element in order, producing a sequence of the
    /// same length. A panic in `f` propagates to the caller.
    pub fn map_to_integer(&self, f: impl FnMut(i64) -> i64) -> IntegerSequence {
        Self {
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    /// Apply `f` to every element in order, crossing into a string
    /// sequence of the same length.
    pub fn map_to_string(&self, f: impl FnMut(i64) -> String) -> StringSequence {
        StringSequence::new(self.data.iter().copied().map(f).collect())
    }

    /// Retain the elements for which `predicate` holds, in their original
    /// relative order.
    pub fn filter(&self, mut predicate: impl FnMut(i64) -> bool) -> IntegerSequence {
        Self {
            data: self
                .data
                .iter()
                .copied()
                .filter(|&item| predicate(item))
                .collect(),
        }
    }

    /// Invoke `observer` once per element in order, purely for
    /// observation, then hand back a value-equal sequence so the chain
    /// can continue.
    pub fn peek(&self, mut observer: impl FnMut(i64)) -> IntegerSequence {
        for &item in &self.data {
            observer(item);
        }
        self.clone()
    }

    /// The first `min(n, count)` elements in original order. `limit(0)`
    /// is the empty sequence; an oversized `n` is clamped, not rejected.
    pub fn limit(&self, n: usize) -> IntegerSequence {
        Self {
            data: self.data.iter().copied().take(n).collect(),
        }
    }

    /// Drop the first `n` elements, or all of them when `n` exceeds the
    /// length; the rest keep their order.
    pub fn skip(&self, n: usize) -> IntegerSequence {
        Self {
            data: self.data.iter().copied().skip(n).collect(),
        }
    }

    /// Keep only the earliest occurrence of each value, preserving the
    /// relative order of first occurrences.
    pub fn distinct(&self) -> IntegerSequence {
        let mut seen = HashSet::new();
        Self {
            data: self
                .data
                .iter()
                .copied()
                .filter(|&item| seen.insert(item))
                .collect(),
        }
    }

    /// Stable ascending sort by natural integer ordering.
    pub fn sorted(&self) -> IntegerSequence {
        let mut data = self.data.clone();
        data.sort();
        Self { data }
    }

    /// Stable sort driven by a caller-supplied "less-than" predicate.
    /// Elements neither of which is less than the other keep their
    /// relative input order.
    pub fn sorted_by(&self, mut less: impl FnMut(i64, i64) -> bool) -> IntegerSequence {
        let mut data = self.data.clone();
        data.sort_by(|&a, &b| {
            if less(a, b) {
                Ordering::Less
            } else if less(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        Self { data }
    }

    /// Left fold: the accumulator starts at `initial` and is combined
    /// with each element in order. An empty sequence yields `initial`
    /// unchanged.
    pub fn reduce(&self, initial: i64, mut combiner: impl FnMut(i64, i64) -> i64) -> i64 {
        let mut accumulator = initial;
        for &item in &self.data {
            accumulator = combiner(accumulator, item);
        }
        accumulator
    }

    /// Invoke `action` once per element in order, for side effects only.
    pub fn for_each(&self, mut action: impl FnMut(i64)) {
        for &item in &self.data {
            action(item);
        }
    }

    /// Materialize the elements into a plain vector, in current order.
    /// The result is freshly allocated, never the backing storage itself.
    pub fn collect(&self) -> Vec<i64> {
        self.data.clone()
    }

    pub fn count(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Maximum by natural ordering. An empty sequence yields `0`, the
    /// zero value of the element type, rather than signalling a failure.
    pub fn max(&self) -> i64 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Minimum by natural ordering, with the same empty-sequence quirk as
    /// [`IntegerSequence::max`].
    pub fn min(&self) -> i64 {
        self.data.iter().copied().min().unwrap_or(0)
    }
}

impl From<Vec<i64>> for IntegerSequence {
    fn from(data: Vec<i64>) -> Self {
        Self { data }
    }
}

impl From<&[i64]> for IntegerSequence {
    fn from(data: &[i64]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl FromIterator<i64> for IntegerSequence {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for IntegerSequence {
    type Item = i64;
    type IntoIter = std::vec::IntoIter<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a IntegerSequence {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

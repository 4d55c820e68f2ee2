use crate::integer::IntegerSequence;

/// An ordered sequence of strings with a deliberately small operation
/// set: filter, map back into integers, materialize. Anything richer
/// goes through [`IntegerSequence`] first.
///
/// The same non-interference contract as the integer side applies:
/// every transformation allocates fresh backing storage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringSequence {
    data: Vec<String>,
}

impl StringSequence {
    pub fn new(data: Vec<String>) -> Self {
        Self { data }
    }

    pub fn empty() -> Self {
        Self { data: Vec::new() }
    }

    /// Retain the elements for which `predicate` holds, in their original
    /// relative order.
    pub fn filter(&self, mut predicate: impl FnMut(&str) -> bool) -> StringSequence {
        Self {
            data: self
                .data
                .iter()
                .filter(|item| predicate(item.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// Apply `f` to every element in order, crossing back into an
    /// integer sequence of the same length.
    pub fn map_to_integer(&self, mut f: impl FnMut(&str) -> i64) -> IntegerSequence {
        IntegerSequence::new(self.data.iter().map(|item| f(item)).collect())
    }

    /// Materialize the elements into a plain vector, in current order.
    pub fn collect(&self) -> Vec<String> {
        self.data.clone()
    }

    pub fn count(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<String>> for StringSequence {
    fn from(data: Vec<String>) -> Self {
        Self { data }
    }
}

impl FromIterator<String> for StringSequence {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for StringSequence {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().map(|item| item.to_string()).collect(),
        }
    }
}

impl IntoIterator for StringSequence {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a StringSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

//! Ordered value collections for header fields
use std::{
    collections::HashSet,
    hash::{Hash, Hasher},
};

mod de;
mod ser;

/// Insertion-ordered set of field values.
///
/// Inserting a value that is already present keeps the first occurrence so
/// iteration order stays the order in which distinct values were first seen.
/// Comparison is case-sensitive. Equality and hashing ignore insertion
/// order; only iteration and [`ValueSet::join`] follow it.
///
/// No validation is performed on whether the values are valid HTTP values.
#[derive(Debug, Clone, Default)]
pub struct ValueSet {
    values: Vec<String>,
    index: HashSet<String>,
}

impl ValueSet {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            index: HashSet::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            index: HashSet::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds a value and returns whether it was not already present.
    pub fn insert<S: Into<String>>(&mut self, value: S) -> bool {
        let value = value.into();

        if self.index.insert(value.clone()) {
            self.values.push(value);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.index.contains(value)
    }

    /// Returns the first inserted value.
    pub fn first(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    pub fn iter(&self) -> ValueSetIter<'_> {
        ValueSetIter::new(&self.values)
    }

    /// Concatenates the values in insertion order with the separator between
    /// each pair.
    pub fn join(&self, separator: &str) -> String {
        self.values.join(separator)
    }
}

impl PartialEq for ValueSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|value| other.contains(value))
    }
}

impl Eq for ValueSet {}

impl Hash for ValueSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut sorted = self.values.iter().collect::<Vec<_>>();
        sorted.sort_unstable();
        sorted.hash(state);
    }
}

impl IntoIterator for ValueSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueSet {
    type Item = &'a str;
    type IntoIter = ValueSetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> Extend<S> for ValueSet {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ValueSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

pub struct ValueSetIter<'a> {
    values: std::slice::Iter<'a, String>,
}

impl<'a> ValueSetIter<'a> {
    fn new(values: &'a [String]) -> Self {
        Self {
            values: values.iter(),
        }
    }
}

impl<'a> Iterator for ValueSetIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.values.next().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_set_create() {
        let mut set = ValueSet::from_iter(["v1"]);

        assert!(!set.is_empty());
        assert_eq!(set.len(), 1);
        assert!(set.contains("v1"));
        assert_eq!(set.first(), Some("v1"));

        set = ValueSet::new();

        assert!(set.is_empty());
        assert_eq!(set.first(), None);
        assert_eq!(set.join(";"), "");
    }

    #[test]
    fn test_value_set_insertion_order() {
        let mut set = ValueSet::new();

        assert!(set.insert("b"));
        assert!(set.insert("a"));
        assert!(set.insert("c"));
        assert!(!set.insert("a"));

        assert_eq!(set.len(), 3);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(set.join(";"), "b;a;c");
    }

    #[test]
    fn test_value_set_case_sensitive() {
        let set = ValueSet::from_iter(["gzip", "GZIP", "gzip"]);

        assert_eq!(set.len(), 2);
        assert!(set.contains("GZIP"));
        assert!(!set.contains("Gzip"));
    }

    #[test]
    fn test_value_set_many_duplicates() {
        let set = (0..10_000)
            .map(|index| format!("v{}", index % 1000))
            .collect::<ValueSet>();

        assert_eq!(set.len(), 1000);
        assert_eq!(set.first(), Some("v0"));
        assert!(set.contains("v999"));
        assert!(!set.contains("v1000"));
        assert_eq!(set.iter().nth(500), Some("v500"));
    }

    #[test]
    fn test_value_set_equality_ignores_order() {
        let ab = ValueSet::from_iter(["a", "b"]);
        let ba = ValueSet::from_iter(["b", "a"]);

        assert_eq!(ab, ba);
        assert_eq!(ab.join(";"), "a;b");
        assert_eq!(ba.join(";"), "b;a");
        assert_ne!(ab, ValueSet::from_iter(["a", "c"]));
        assert_ne!(ab, ValueSet::from_iter(["a"]));

        let mut hashed = HashSet::new();
        hashed.insert(ab);
        assert!(hashed.contains(&ba));
    }

    #[test]
    fn test_value_set_iterator() {
        let set = ValueSet::from_iter(["v1".to_string(), "v2".to_string()]);

        assert_eq!((&set).into_iter().collect::<Vec<_>>(), vec!["v1", "v2"]);
        assert_eq!(
            set.into_iter().collect::<Vec<_>>(),
            vec!["v1".to_string(), "v2".to_string()]
        );
    }
}

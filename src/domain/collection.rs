//! Ordered collection of children that are unique by identity key
//!
//! Every container in the hierarchy (institute, course, faculty, department,
//! group) owns one of these. Insertion order is the canonical iteration and
//! serialization order; removal splices without reordering the rest.

use std::fmt;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::named::NamedEntity;

/// A child that can be located among its siblings by a natural key.
pub trait Keyed: NamedEntity {
    type Key: ?Sized + PartialEq + fmt::Display;

    fn key(&self) -> &Self::Key;
}

/// Description of the container a collection belongs to, for error messages.
#[derive(Debug, Clone, Copy)]
pub struct Owner<'a> {
    pub kind: &'static str,
    pub name: &'a str,
}

impl fmt::Display for Owner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyedCollection<T> {
    items: Vec<T>,
}

impl<T> Default for KeyedCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed> KeyedCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` unless a sibling already carries its key.
    ///
    /// On failure the collection is left untouched.
    pub fn insert(&mut self, item: T, owner: Owner<'_>) -> DomainResult<()> {
        if self.find(item.key()).is_some() {
            return Err(DomainError::DuplicateKey {
                kind: T::KIND,
                key: item.key().to_string(),
                parent: owner.to_string(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove and return the child with `key`, keeping the order of the rest.
    pub fn remove(&mut self, key: &T::Key, owner: Owner<'_>) -> DomainResult<T> {
        match self.items.iter().position(|item| item.key() == key) {
            Some(index) => Ok(self.items.remove(index)),
            None => Err(DomainError::NotFound {
                kind: T::KIND,
                key: key.to_string(),
                parent: owner.to_string(),
            }),
        }
    }

    pub fn find(&self, key: &T::Key) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Mutable lookup stays crate-internal: replacing a child wholesale could
    /// smuggle in a duplicate key.
    pub(crate) fn find_mut(&mut self, key: &T::Key) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.key() == key)
    }

    /// Like [`find_mut`](Self::find_mut), but absence is an error.
    pub(crate) fn get_mut(&mut self, key: &T::Key, owner: Owner<'_>) -> DomainResult<&mut T> {
        match self.items.iter().position(|item| item.key() == key) {
            Some(index) => Ok(&mut self.items[index]),
            None => Err(DomainError::NotFound {
                kind: T::KIND,
                key: key.to_string(),
                parent: owner.to_string(),
            }),
        }
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T> KeyedCollection<T> {
    /// Read-only view of the children in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a KeyedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tag(String);

    impl NamedEntity for Tag {
        const KIND: &'static str = "Tag";

        fn name(&self) -> &str {
            &self.0
        }
    }

    impl Keyed for Tag {
        type Key = str;

        fn key(&self) -> &str {
            &self.0
        }
    }

    const OWNER: Owner<'static> = Owner {
        kind: "Board",
        name: "main",
    };

    fn tags(names: &[&str]) -> KeyedCollection<Tag> {
        let mut collection = KeyedCollection::new();
        for name in names {
            collection.insert(Tag(name.to_string()), OWNER).unwrap();
        }
        collection
    }

    #[test]
    fn given_duplicate_key_when_inserting_then_rejects_and_keeps_len() {
        let mut collection = tags(&["a", "b"]);

        let err = collection.insert(Tag("a".into()), OWNER).unwrap_err();

        assert_eq!(err.to_string(), "Tag 'a' already exists in Board 'main'");
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn given_keys_differing_in_case_when_inserting_then_both_are_kept() {
        let collection = tags(&["Math", "math"]);
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn given_middle_child_when_removing_then_preserves_order_of_rest() {
        let mut collection = tags(&["a", "b", "c"]);

        let removed = collection.remove("b", OWNER).unwrap();

        assert_eq!(removed, Tag("b".into()));
        let names: Vec<&str> = collection.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn given_missing_key_when_removing_then_not_found_and_unchanged() {
        let mut collection = tags(&["a"]);

        let err = collection.remove("z", OWNER).unwrap_err();

        assert!(matches!(err, DomainError::NotFound { kind: "Tag", .. }));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn given_missing_key_when_finding_then_returns_none() {
        let collection = tags(&["a"]);
        assert!(collection.find("z").is_none());
        assert_eq!(collection.find("a"), Some(&Tag("a".into())));
    }
}

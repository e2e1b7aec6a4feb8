// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An insertion-ordered set of candidates keyed by id.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::Candidate;

/// An insertion-ordered mapping from candidate id to candidate.
///
/// The first candidate inserted for an id wins; later candidates with the same
/// id are ignored. Entries keep their insertion order, which is the order
/// handed to selection listeners.
#[derive(Clone, Debug)]
pub struct Subset<C>
where
    C: Candidate,
{
    entries: Vec<C>,
    index: HashMap<C::Id, usize>,
}

impl<C> Default for Subset<C>
where
    C: Candidate,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Subset<C>
where
    C: Candidate,
{
    /// Creates an empty subset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates an empty subset with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in insertion order.
    #[must_use]
    pub fn items(&self) -> &[C] {
        &self.entries
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, C> {
        self.entries.iter()
    }

    /// Returns `true` if an entry with `id` is present.
    #[must_use]
    pub fn contains_id(&self, id: &C::Id) -> bool {
        self.index.contains_key(id)
    }

    /// Returns the entry with `id`, if present.
    #[must_use]
    pub fn get(&self, id: &C::Id) -> Option<&C> {
        self.index.get(id).map(|&idx| &self.entries[idx])
    }

    /// Inserts `candidate` unless its id is already present.
    ///
    /// Returns `true` if the candidate was inserted.
    pub fn insert(&mut self, candidate: C) -> bool {
        if self.index.contains_key(candidate.id()) {
            return false;
        }
        self.index.insert(candidate.id().clone(), self.entries.len());
        self.entries.push(candidate);
        true
    }

    /// Inserts every candidate whose id is not already present.
    ///
    /// Returns the number of candidates inserted.
    pub fn extend_from<'a, I>(&mut self, candidates: I) -> usize
    where
        I: IntoIterator<Item = &'a C>,
        C: Clone + 'a,
    {
        let mut added = 0;
        for candidate in candidates {
            if self.insert(candidate.clone()) {
                added += 1;
            }
        }
        added
    }

    /// Returns `true` if both subsets hold exactly the same ids, in any order.
    #[must_use]
    pub fn same_ids(&self, other: &Self) -> bool {
        self.len() == other.len() && self.index.keys().all(|id| other.contains_id(id))
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    pub(crate) fn debug_assert_consistent(&self) {
        debug_assert_eq!(
            self.entries.len(),
            self.index.len(),
            "subset index out of sync with its entries"
        );
        for (idx, entry) in self.entries.iter().enumerate() {
            debug_assert_eq!(
                self.index.get(entry.id()),
                Some(&idx),
                "subset index points at the wrong entry for {:?}",
                entry.id()
            );
        }
    }
}

impl<'a, C> IntoIterator for &'a Subset<C>
where
    C: Candidate,
{
    type Item = &'a C;
    type IntoIter = core::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<C> FromIterator<C> for Subset<C>
where
    C: Candidate,
{
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut subset = Self::with_capacity(lower);
        for candidate in iter {
            subset.insert(candidate);
        }
        subset
    }
}

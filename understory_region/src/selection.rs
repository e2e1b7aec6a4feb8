// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The published region selection.

use crate::{Candidate, Subset};

/// The deduplicated union of every layer's candidates, as last published.
///
/// A `Selection` is never edited entry by entry; it is replaced wholesale with
/// a freshly computed union. The replacement only takes effect when the set of
/// ids differs, so [`Selection::revision`] counts actual changes.
#[derive(Clone, Debug)]
pub struct Selection<C>
where
    C: Candidate,
{
    entries: Subset<C>,
    revision: u64,
}

impl<C> Default for Selection<C>
where
    C: Candidate,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Selection<C>
where
    C: Candidate,
{
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Subset::new(),
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of selected candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the selected candidates in union order.
    #[must_use]
    pub fn items(&self) -> &[C] {
        self.entries.items()
    }

    /// Returns an iterator over the selected candidates.
    pub fn iter(&self) -> core::slice::Iter<'_, C> {
        self.entries.iter()
    }

    /// Returns `true` if a candidate with `id` is selected.
    #[must_use]
    pub fn contains(&self, id: &C::Id) -> bool {
        self.entries.contains_id(id)
    }

    /// Returns the selected candidate with `id`, if any.
    #[must_use]
    pub fn get(&self, id: &C::Id) -> Option<&C> {
        self.entries.get(id)
    }

    /// Returns the revision counter.
    ///
    /// The counter is bumped only when [`Selection::replace_with`] or
    /// [`Selection::clear`] changes the set of selected ids.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the contents with `entries` if the set of ids differs.
    ///
    /// Returns `true` if the selection changed. A union holding the same ids
    /// in a different order is not a change and is discarded.
    pub fn replace_with(&mut self, entries: Subset<C>) -> bool {
        if entries.same_ids(&self.entries) {
            return false;
        }
        self.entries = entries;
        self.bump_revision();
        true
    }

    /// Empties the selection.
    ///
    /// Returns `true` if anything was selected.
    pub fn clear(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.entries.clear();
        self.bump_revision();
        true
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<'a, C> IntoIterator for &'a Selection<C>
where
    C: Candidate,
{
    type Item = &'a C;
    type IntoIter = core::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-layer contained subsets.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::{Candidate, ContainsParams, Ring, Subset};

/// Counters from a layer's last recomputation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LayerStats {
    /// Candidates tested against the ring.
    pub tested: usize,
    /// Candidates found inside the ring.
    pub contained: usize,
    /// Candidates skipped because their location was not finite.
    pub skipped_invalid: usize,
}

/// One independently tracked ring and the candidates it contains.
#[derive(Clone, Debug)]
pub struct Layer<L, C>
where
    C: Candidate,
{
    id: L,
    ring: Ring,
    subset: Subset<C>,
    stats: LayerStats,
}

impl<L, C> Layer<L, C>
where
    C: Candidate,
{
    /// Returns the caller-supplied layer id.
    #[must_use]
    pub fn id(&self) -> &L {
        &self.id
    }

    /// Returns the ring the subset was last computed from.
    #[must_use]
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// Returns the contained candidates.
    #[must_use]
    pub fn subset(&self) -> &Subset<C> {
        &self.subset
    }

    /// Returns the counters from the last recomputation.
    #[must_use]
    pub fn stats(&self) -> LayerStats {
        self.stats
    }
}

/// Tracks, per layer id, the candidates that a ring contains.
///
/// A layer's subset is always recomputed from the full candidate pool passed
/// in, never from its previous membership: reshaping a ring can both admit and
/// drop candidates.
///
/// Layers are kept in creation order. Alongside the drawn layers there is a
/// default subset, populated explicitly through
/// [`LayerSetTracker::add_to_default`] and never derived from a ring.
///
/// Layer ids only need equality; lookups are linear in the number of layers,
/// which stays small for hand-drawn regions.
#[derive(Clone, Debug)]
pub struct LayerSetTracker<L, C>
where
    C: Candidate,
{
    params: ContainsParams,
    default: Subset<C>,
    layers: Vec<Layer<L, C>>,
}

impl<L, C> Default for LayerSetTracker<L, C>
where
    C: Candidate,
{
    fn default() -> Self {
        Self::with_params(ContainsParams::default())
    }
}

impl<L, C> LayerSetTracker<L, C>
where
    C: Candidate,
{
    /// Creates an empty tracker using the default containment parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty tracker using `params` for every containment test.
    #[must_use]
    pub fn with_params(params: ContainsParams) -> Self {
        Self {
            params,
            default: Subset::new(),
            layers: Vec::new(),
        }
    }

    /// Returns the containment parameters.
    #[must_use]
    pub fn params(&self) -> &ContainsParams {
        &self.params
    }

    /// Returns the number of drawn layers (the default subset is not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` if there are no drawn layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Returns the drawn layers in creation order.
    #[must_use]
    pub fn layers(&self) -> &[Layer<L, C>] {
        &self.layers
    }

    /// Returns the default subset.
    #[must_use]
    pub fn default_subset(&self) -> &Subset<C> {
        &self.default
    }

    /// Removes every drawn layer and empties the default subset.
    pub fn clear(&mut self) {
        self.layers.clear();
        self.default.clear();
    }
}

impl<L, C> LayerSetTracker<L, C>
where
    L: Debug + PartialEq,
    C: Candidate + Clone,
{
    /// Returns the layer with `id`, if present.
    #[must_use]
    pub fn layer(&self, id: &L) -> Option<&Layer<L, C>> {
        self.layers.iter().find(|layer| &layer.id == id)
    }

    /// Computes the candidates of `pool` inside `ring` and stores them as layer `id`.
    ///
    /// An existing layer with the same id is replaced in place, keeping its
    /// position in the creation order.
    pub fn add_layer(&mut self, id: L, ring: Ring, pool: &[C]) -> &Subset<C> {
        let (subset, stats) = compute(&ring, pool, &self.params);
        log::debug!(
            "layer {id:?}: {} of {} candidates inside a {}-vertex ring",
            stats.contained,
            stats.tested,
            ring.len()
        );
        if stats.skipped_invalid > 0 {
            log::warn!(
                "layer {id:?}: skipped {} candidates with non-finite coordinates",
                stats.skipped_invalid
            );
        }

        let layer = Layer {
            id,
            ring,
            subset,
            stats,
        };
        let idx = match self.layers.iter().position(|l| l.id == layer.id) {
            Some(idx) => {
                self.layers[idx] = layer;
                idx
            }
            None => {
                self.layers.push(layer);
                self.layers.len() - 1
            }
        };
        &self.layers[idx].subset
    }

    /// Recomputes layer `id` from `ring` against the full `pool`.
    ///
    /// Unknown ids are created, as by [`LayerSetTracker::add_layer`].
    pub fn edit_layer(&mut self, id: L, ring: Ring, pool: &[C]) -> &Subset<C> {
        self.add_layer(id, ring, pool)
    }

    /// Discards layer `id`.
    ///
    /// Returns `false` if there was no such layer.
    pub fn remove_layer(&mut self, id: &L) -> bool {
        match self.layers.iter().position(|layer| &layer.id == id) {
            Some(idx) => {
                self.layers.remove(idx);
                log::debug!("layer {id:?} removed");
                true
            }
            None => false,
        }
    }

    /// Inserts every candidate of `pool` into the default subset.
    ///
    /// Returns the number of candidates that were not already present.
    pub fn add_to_default(&mut self, pool: &[C]) -> usize {
        let added = self.default.extend_from(pool);
        log::debug!(
            "default layer: {added} added, {} total",
            self.default.len()
        );
        added
    }

    /// Merges the default subset and every layer's subset.
    ///
    /// Order is the default subset first, then layers in creation order. The
    /// first occurrence of an id is kept.
    #[must_use]
    pub fn union_all(&self) -> Subset<C> {
        let hint = self.default.len()
            + self
                .layers
                .iter()
                .map(|layer| layer.subset.len())
                .sum::<usize>();
        let mut union = Subset::with_capacity(hint);
        union.extend_from(&self.default);
        for layer in &self.layers {
            union.extend_from(&layer.subset);
        }
        union.debug_assert_consistent();
        union
    }
}

fn compute<C>(ring: &Ring, pool: &[C], params: &ContainsParams) -> (Subset<C>, LayerStats)
where
    C: Candidate + Clone,
{
    let mut stats = LayerStats::default();
    let mut subset = Subset::new();
    if ring.is_degenerate() {
        return (subset, stats);
    }
    stats.tested = pool.len();
    for candidate in pool {
        let location = candidate.location();
        if !location.is_finite() {
            stats.skipped_invalid += 1;
            continue;
        }
        if ring.contains_with(location, params) {
            subset.insert(candidate.clone());
        }
    }
    stats.contained = subset.len();
    (subset, stats)
}

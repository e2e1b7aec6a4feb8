// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The caller-facing region selection controller.

use alloc::vec::Vec;
use core::fmt;
use core::fmt::Debug;

use crate::{Candidate, ContainsParams, LayerSetTracker, Ring, Selection};

/// Receives the selection whenever it changes.
///
/// Any `FnMut(&[C], usize)` closure is a listener. Annotate the slice
/// parameter (`|items: &[C], count: usize| ...`) so the closure accepts any
/// borrow lifetime.
pub trait SelectionListener<C> {
    /// Called synchronously after a mutation changed the selected ids.
    ///
    /// `count` is `selection.len()`.
    fn selection_changed(&mut self, selection: &[C], count: usize);
}

impl<C, F> SelectionListener<C> for F
where
    F: FnMut(&[C], usize),
{
    fn selection_changed(&mut self, selection: &[C], count: usize) {
        self(selection, count);
    }
}

/// A batch of draw-tool lifecycle events.
///
/// A batch is applied as a whole and published at most once.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawEvent<L> {
    /// A new ring was drawn.
    Created {
        /// The caller-chosen layer id.
        layer: L,
        /// The drawn ring.
        ring: Ring,
    },
    /// One or more rings were reshaped.
    Edited(Vec<(L, Ring)>),
    /// One or more rings were deleted.
    Deleted(Vec<L>),
}

/// Maintains the region selection and notifies a listener of changes.
///
/// Every mutation recomputes the union of all layers. If the set of selected
/// ids differs from the last published selection, the new selection is stored
/// and handed to the listener along with its size; otherwise nothing is
/// published.
///
/// All work is synchronous and bounded by ring size times pool size. The
/// controller owns all mutable state, so concurrent use means serializing
/// calls per controller rather than locking individual layers.
pub struct SelectionController<L, C, F>
where
    C: Candidate,
{
    tracker: LayerSetTracker<L, C>,
    selection: Selection<C>,
    listener: F,
}

impl<L, C, F> Debug for SelectionController<L, C, F>
where
    L: Debug,
    C: Candidate + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("tracker", &self.tracker)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl<L, C, F> SelectionController<L, C, F>
where
    L: Debug + PartialEq,
    C: Candidate + Clone,
    F: SelectionListener<C>,
{
    /// Creates a controller with no layers that reports to `listener`.
    #[must_use]
    pub fn new(listener: F) -> Self {
        Self::with_params(ContainsParams::default(), listener)
    }

    /// Like [`SelectionController::new`], with explicit containment parameters.
    #[must_use]
    pub fn with_params(params: ContainsParams, listener: F) -> Self {
        Self {
            tracker: LayerSetTracker::with_params(params),
            selection: Selection::new(),
            listener,
        }
    }

    /// Returns the layers.
    #[must_use]
    pub fn tracker(&self) -> &LayerSetTracker<L, C> {
        &self.tracker
    }

    /// Returns the last published selection.
    #[must_use]
    pub fn selection(&self) -> &Selection<C> {
        &self.selection
    }

    /// Returns the number of selected candidates.
    #[must_use]
    pub fn count(&self) -> usize {
        self.selection.len()
    }

    /// Returns the listener.
    ///
    /// Use this to read back whatever a stateful listener has recorded, such
    /// as a history of published counts.
    #[must_use]
    pub fn listener(&self) -> &F {
        &self.listener
    }

    /// Adds (or replaces) layer `id` and republishes.
    ///
    /// Returns `true` if the selection changed.
    pub fn add_layer(&mut self, id: L, ring: Ring, pool: &[C]) -> bool {
        self.tracker.add_layer(id, ring, pool);
        self.publish()
    }

    /// Recomputes layer `id` from the full `pool` and republishes.
    ///
    /// Unknown ids are created. Returns `true` if the selection changed.
    pub fn edit_layer(&mut self, id: L, ring: Ring, pool: &[C]) -> bool {
        self.tracker.edit_layer(id, ring, pool);
        self.publish()
    }

    /// Removes layer `id` and republishes.
    ///
    /// Unknown ids are ignored. Returns `true` if the selection changed.
    pub fn remove_layer(&mut self, id: &L) -> bool {
        if !self.tracker.remove_layer(id) {
            return false;
        }
        self.publish()
    }

    /// Adds every candidate of `pool` to the default layer and republishes.
    ///
    /// This backs "select everything visible". Returns `true` if the
    /// selection changed.
    pub fn add_to_default(&mut self, pool: &[C]) -> bool {
        self.tracker.add_to_default(pool);
        self.publish()
    }

    /// Removes every layer, empties the default layer, and publishes the
    /// empty selection.
    ///
    /// The listener is notified even if the selection was already empty.
    pub fn clear(&mut self) {
        self.tracker.clear();
        self.selection.clear();
        log::debug!("selection cleared");
        self.listener.selection_changed(self.selection.items(), 0);
    }

    /// Applies a batch of draw events and publishes once.
    ///
    /// Returns `true` if the selection changed.
    pub fn apply(&mut self, event: DrawEvent<L>, pool: &[C]) -> bool {
        match event {
            DrawEvent::Created { layer, ring } => {
                self.tracker.add_layer(layer, ring, pool);
            }
            DrawEvent::Edited(edits) => {
                for (layer, ring) in edits {
                    self.tracker.edit_layer(layer, ring, pool);
                }
            }
            DrawEvent::Deleted(layers) => {
                let mut removed = false;
                for layer in &layers {
                    removed |= self.tracker.remove_layer(layer);
                }
                if !removed {
                    return false;
                }
            }
        }
        self.publish()
    }

    fn publish(&mut self) -> bool {
        let union = self.tracker.union_all();
        if !self.selection.replace_with(union) {
            log::trace!("selection unchanged at {} candidates", self.selection.len());
            return false;
        }
        log::debug!(
            "selection revision {}: {} candidates across {} layers",
            self.selection.revision(),
            self.selection.len(),
            self.tracker.len()
        );
        self.listener
            .selection_changed(self.selection.items(), self.selection.len());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CandidatePoint, LatLng};
    use alloc::vec;

    type Portal = CandidatePoint<u32>;

    #[derive(Default)]
    struct Counts(Vec<usize>);

    impl SelectionListener<Portal> for Counts {
        fn selection_changed(&mut self, selection: &[Portal], count: usize) {
            assert_eq!(selection.len(), count, "count must match the slice");
            self.0.push(count);
        }
    }

    fn row() -> Vec<Portal> {
        (0..4)
            .map(|i| CandidatePoint::new(i, LatLng::new(1.0, f64::from(i) * 2.0 + 1.0)))
            .collect()
    }

    fn strip(lng0: f64, lng1: f64) -> Ring {
        Ring::new(vec![
            LatLng::new(0.0, lng0),
            LatLng::new(0.0, lng1),
            LatLng::new(2.0, lng1),
            LatLng::new(2.0, lng0),
        ])
    }

    #[test]
    fn unchanged_union_is_not_republished() {
        let pool = row();
        let mut ctl = SelectionController::new(Counts::default());
        assert!(ctl.add_layer("a", strip(0.0, 4.0), &pool));
        // A second ring over the same candidates adds nothing new.
        assert!(!ctl.add_layer("b", strip(0.5, 3.5), &pool));
        assert_eq!(ctl.listener().0, [2]);
        assert_eq!(ctl.selection().revision(), 1);
    }

    #[test]
    fn batch_edit_publishes_once() {
        let pool = row();
        let mut ctl = SelectionController::new(Counts::default());
        ctl.add_layer(1, strip(0.0, 2.0), &pool);
        ctl.add_layer(2, strip(2.5, 4.0), &pool);

        let changed = ctl.apply(
            DrawEvent::Edited(vec![(1, strip(0.0, 6.0)), (2, strip(6.5, 8.0))]),
            &pool,
        );
        assert!(changed);
        assert_eq!(ctl.listener().0, [1, 2, 4]);
    }

    #[test]
    fn delete_of_unknown_layers_is_silent() {
        let pool = row();
        let mut ctl = SelectionController::new(Counts::default());
        ctl.apply(
            DrawEvent::Created {
                layer: 1,
                ring: strip(0.0, 8.0),
            },
            &pool,
        );
        assert!(!ctl.apply(DrawEvent::Deleted(vec![9]), &pool));
        assert!(!ctl.remove_layer(&9));
        assert!(ctl.apply(DrawEvent::Deleted(vec![9, 1]), &pool));
        assert_eq!(ctl.listener().0, [4, 0]);
    }

    #[test]
    fn clear_always_notifies() {
        let pool = row();
        let mut ctl = SelectionController::<u8, _, _>::new(Counts::default());
        ctl.clear();
        ctl.add_to_default(&pool);
        ctl.clear();
        assert_eq!(ctl.listener().0, [0, 4, 0]);
        assert!(ctl.tracker().default_subset().is_empty());
        assert_eq!(ctl.count(), 0);
    }

    #[test]
    fn closures_are_listeners() {
        let pool = row();
        let mut last = None;
        {
            let mut ctl = SelectionController::new(|items: &[Portal], count: usize| {
                last = Some((items.first().map(|p| p.id), count));
            });
            ctl.add_layer((), strip(2.5, 8.0), &pool);
        }
        assert_eq!(last, Some((Some(1), 3)));
    }
}

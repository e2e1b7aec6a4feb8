// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_region --heading-base-level=0

//! Understory Region: select point entities by hand-drawn polygons.
//!
//! An operator draws one or more polygons over a map; this crate keeps the set
//! of point entities inside those polygons correct as polygons are added,
//! reshaped, or removed. It is headless: callers supply the candidate points
//! and the draw-tool events, and receive a deduplicated selection plus a count.
//!
//! The crate is layered:
//!
//! - **Containment** ([`Ring`], [`ring_contains`]): whether a point lies inside
//!   (or on the boundary of) a single polygon ring.
//! - **Layers** ([`LayerSetTracker`]): per caller-chosen layer id, the subset
//!   of a candidate pool that the layer's ring contains. A layer is always
//!   recomputed from the full pool when its ring changes.
//! - **Selection** ([`SelectionController`]): the union of every layer plus a
//!   manually populated default layer, published to a [`SelectionListener`]
//!   whenever the set of selected ids changes.
//!
//! It does **not** render shapes, persist drawings, reproject coordinates, or
//! repair self-intersecting polygons. Latitude and longitude are treated as
//! planar coordinates.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_region::{CandidatePoint, LatLng, Ring, SelectionController};
//!
//! let pool: Vec<CandidatePoint<u32>> = (1..=5)
//!     .map(|i| CandidatePoint::new(i, LatLng::new(f64::from(i), f64::from(i))))
//!     .collect();
//!
//! let square = |hi: f64| {
//!     Ring::new(vec![
//!         LatLng::new(0.0, 0.0),
//!         LatLng::new(0.0, hi),
//!         LatLng::new(hi, hi),
//!         LatLng::new(hi, 0.0),
//!     ])
//! };
//!
//! let mut counts = Vec::new();
//! let mut regions = SelectionController::new(|_: &[CandidatePoint<u32>], count: usize| {
//!     counts.push(count);
//! });
//!
//! // Boundary points are included: (3, 3) is a corner of the ring.
//! regions.add_layer("lasso", square(3.0), &pool);
//! assert_eq!(regions.count(), 3);
//!
//! // Reshaping recomputes from the full pool.
//! regions.edit_layer("lasso", square(1.0), &pool);
//! assert_eq!(regions.count(), 1);
//!
//! drop(regions);
//! assert_eq!(counts, [3, 1]);
//! ```
//!
//! ## Boundary rules
//!
//! Containment uses a signed angle sum, so clockwise and counter-clockwise
//! rings behave the same. A point within [`EPSILON`] of a vertex, or lying on
//! an edge, is contained. Rings with fewer than three vertices contain nothing,
//! and points with non-finite coordinates are never contained. See
//! [`ContainsParams`] to use a different tolerance.
//!
//! ## Logging
//!
//! Layer recomputations and selection changes are reported through the
//! [`log`](https://docs.rs/log) facade at `debug` level; no logger is installed
//! by this crate.
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the Rust standard library for float math.
//! - `libm`: Use `libm` through Kurbo for float math in `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod candidate;
mod controller;
mod ring;
mod selection;
mod subset;
mod tracker;

pub use candidate::{Candidate, CandidatePoint};
pub use controller::{DrawEvent, SelectionController, SelectionListener};
pub use ring::{ContainsParams, EPSILON, LatLng, Ring, ring_contains, ring_contains_with};
pub use selection::Selection;
pub use subset::Subset;
pub use tracker::{Layer, LayerSetTracker, LayerStats};

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-in-ring containment.
//!
//! The test sums the signed angles that each ring edge subtends at the query
//! point. The sum is a multiple of `2π` (the winding number), and a point is
//! inside when that multiple is odd. The result does not depend on whether
//! the ring is wound clockwise or counter-clockwise.
//!
//! Boundary points are contained. Two short-circuits make this deterministic
//! rather than a matter of floating-point noise in the angle sum:
//!
//! - **Vertex**: the query point is within [`EPSILON`] of a ring vertex.
//! - **Rib**: the query point lies on the segment between two consecutive
//!   vertices: the vectors towards both endpoints are opposed, their cross
//!   product is below [`EPSILON`], and the angle between them is within
//!   [`EPSILON`] of `π`.
//!
//! The cross product of the two vectors is the edge length times the
//! distance from the edge. A point counts as on an edge only within
//! `EPSILON / length` of it, and never further than `EPSILON / 2`, so the rib
//! check cannot reach past the ring's bounds inflated by [`EPSILON`].
//!
//! Coordinates are planar: latitude and longitude are used as given, without
//! reprojection or spherical correction.

use alloc::vec::Vec;
use core::f64::consts::TAU;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

/// The canonical containment tolerance.
///
/// This single value governs both boundary short-circuits: a query point
/// closer than `EPSILON` to a vertex is contained, and a query point is on an
/// edge when the cross product of its vectors to the two endpoints is below
/// `EPSILON` and their angle differs from `π` by less than `EPSILON`
/// (measured as the sine of the deviation).
pub const EPSILON: f64 = 1e-9;

/// A latitude/longitude pair.
///
/// For the planar containment test, longitude maps to `x` and latitude to `y`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LatLng {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl LatLng {
    /// Creates a new coordinate pair.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns `true` if both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Returns the planar point (`x = lng`, `y = lat`).
    #[must_use]
    pub const fn to_point(self) -> Point {
        Point::new(self.lng, self.lat)
    }
}

impl From<LatLng> for Point {
    fn from(value: LatLng) -> Self {
        value.to_point()
    }
}

impl From<(f64, f64)> for LatLng {
    /// Converts a `(lat, lng)` tuple.
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// Parameters for containment tests.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContainsParams {
    /// Tolerance for the vertex and rib short-circuits.
    ///
    /// Defaults to [`EPSILON`].
    pub epsilon: f64,
}

impl Default for ContainsParams {
    fn default() -> Self {
        Self { epsilon: EPSILON }
    }
}

/// A closed polygon boundary.
///
/// The last vertex connects back to the first; it does not need to be
/// repeated. A ring with fewer than three vertices contains nothing.
///
/// The ring caches its bounding box so that points well outside it are
/// rejected without walking the edges.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ring {
    vertices: Vec<LatLng>,
    bounds: Option<Rect>,
}

impl Ring {
    /// Creates a ring from its vertices.
    #[must_use]
    pub fn new(vertices: impl Into<Vec<LatLng>>) -> Self {
        let vertices = vertices.into();
        let bounds = bounds_of(&vertices);
        Self { vertices, bounds }
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[LatLng] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the ring has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if the ring has fewer than three vertices.
    ///
    /// Degenerate rings contain no point.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Returns the planar bounding box (`x = lng`, `y = lat`), or `None` for a
    /// degenerate ring.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Returns the same ring with its vertex order reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self {
            vertices,
            bounds: self.bounds,
        }
    }

    /// Returns `true` if `point` is inside or on the boundary of this ring.
    #[must_use]
    pub fn contains(&self, point: LatLng) -> bool {
        self.contains_with(point, &ContainsParams::default())
    }

    /// Like [`Ring::contains`], with explicit parameters.
    #[must_use]
    pub fn contains_with(&self, point: LatLng, params: &ContainsParams) -> bool {
        let Some(bounds) = self.bounds else {
            return false;
        };
        if !within(bounds, point.to_point(), params.epsilon) {
            return false;
        }
        ring_contains_with(&self.vertices, point, params)
    }
}

impl From<Vec<LatLng>> for Ring {
    fn from(vertices: Vec<LatLng>) -> Self {
        Self::new(vertices)
    }
}

impl FromIterator<LatLng> for Ring {
    fn from_iter<I: IntoIterator<Item = LatLng>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}

/// Returns `true` if `point` is inside or on the boundary of `ring`.
///
/// Vertices and points on edges are contained; rings with fewer than three
/// vertices contain nothing. A query point with non-finite coordinates is
/// never contained. Runs in `O(V)` for `V` vertices.
#[must_use]
pub fn ring_contains(ring: &[LatLng], point: LatLng) -> bool {
    ring_contains_with(ring, point, &ContainsParams::default())
}

/// Like [`ring_contains`], with explicit parameters.
#[must_use]
pub fn ring_contains_with(ring: &[LatLng], point: LatLng, params: &ContainsParams) -> bool {
    let Some(&last) = ring.last() else {
        return false;
    };
    if ring.len() < 3 {
        return false;
    }

    let eps = params.epsilon;
    let origin = point.to_point();
    let mut sum = 0.0;
    let mut prev = last.to_point();
    for vertex in ring {
        let vertex = vertex.to_point();
        let a = vertex - origin;
        let b = prev - origin;
        prev = vertex;

        let la = a.hypot();
        let lb = b.hypot();
        if la < eps || lb < eps {
            return true;
        }

        let dot = a.dot(b);
        let det = a.cross(b);
        if on_rib(dot, det, la * lb, eps) {
            return true;
        }

        let alpha = (dot / la / lb).clamp(-1.0, 1.0).acos();
        if det >= 0.0 {
            sum += alpha;
        } else {
            sum -= alpha;
        }
    }

    // NaN falls through as "not contained".
    let winding = (sum / TAU).round();
    (winding % 2.0).abs() == 1.0
}

/// `|det| < eps` and the angle between `a` and `b` is within `eps` of `π`.
///
/// `|det| / (la * lb)` is the sine of the deviation from `π` once the vectors
/// are known to be opposed; the sine is well conditioned there, `acos` is not.
#[inline]
fn on_rib(dot: f64, det: f64, la_lb: f64, eps: f64) -> bool {
    let det = det.abs();
    det < eps && dot < 0.0 && det < eps * la_lb
}

#[inline]
fn within(bounds: Rect, pt: Point, eps: f64) -> bool {
    pt.x >= bounds.x0 - eps
        && pt.x <= bounds.x1 + eps
        && pt.y >= bounds.y0 - eps
        && pt.y <= bounds.y1 + eps
}

fn bounds_of(vertices: &[LatLng]) -> Option<Rect> {
    if vertices.len() < 3 {
        return None;
    }
    let (min, max) = vertices.iter().map(|v| v.to_point()).fold(
        (
            Point::new(f64::INFINITY, f64::INFINITY),
            Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        ),
        |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        },
    );
    Some(Rect::new(min.x, min.y, max.x, max.y))
}

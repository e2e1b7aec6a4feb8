// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identified point entities that can be selected by region.

use core::fmt::Debug;
use core::hash::Hash;

use crate::LatLng;

/// A point entity eligible for containment testing.
///
/// Identity is [`Candidate::id`]: two candidates with equal ids are the same
/// entity, and no subset or selection keeps both.
pub trait Candidate {
    /// The unique identifier type.
    type Id: Clone + Debug + Eq + Hash;

    /// Returns the unique identifier.
    fn id(&self) -> &Self::Id;

    /// Returns the location tested against rings.
    fn location(&self) -> LatLng;
}

/// A plain candidate: an id, a location, and an opaque caller payload.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidatePoint<K, P = ()> {
    /// The unique identifier.
    pub id: K,
    /// The location.
    pub location: LatLng,
    /// Caller data carried along with the point.
    pub payload: P,
}

impl<K> CandidatePoint<K> {
    /// Creates a candidate without a payload.
    #[must_use]
    pub const fn new(id: K, location: LatLng) -> Self {
        Self {
            id,
            location,
            payload: (),
        }
    }
}

impl<K, P> CandidatePoint<K, P> {
    /// Creates a candidate carrying `payload`.
    #[must_use]
    pub const fn with_payload(id: K, location: LatLng, payload: P) -> Self {
        Self {
            id,
            location,
            payload,
        }
    }
}

impl<K, P> Candidate for CandidatePoint<K, P>
where
    K: Clone + Debug + Eq + Hash,
{
    type Id = K;

    fn id(&self) -> &K {
        &self.id
    }

    fn location(&self) -> LatLng {
        self.location
    }
}

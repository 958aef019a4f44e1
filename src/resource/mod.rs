//! Entity kinds served by the resource services.
//!
//! Each kind plugs into the generic [`crate::store::ResourceStore`] and the
//! generic CRUD handlers through the [`Resource`] trait: the payload shapes
//! differ, the locking and id discipline does not.

pub mod booking;
pub mod room;
pub mod student;

pub use booking::{Booking, BookingFilter, BookingPatch, NewBooking};
pub use room::{NewRoom, Room, RoomFilter, RoomPatch};
pub use student::{NewStudent, Student, StudentFilter, StudentPatch};

use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;

/// What DELETE does to a record of a given kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Remove the record; remaining records keep their order.
    Remove,
    /// Keep the record and move it to its terminal state via [`Resource::retire`].
    Retire,
}

pub trait Resource: Clone + Serialize + Send + Sync + 'static {
    /// Create payload, decoded before any lock is taken.
    type Draft: DeserializeOwned + Send + 'static;
    /// Update payload. Absent or empty fields are left untouched.
    type Patch: DeserializeOwned + Default + Send + 'static;
    /// List filter built from query parameters.
    type Filter: Default + Send + 'static;

    /// Display name used in "not found" messages, e.g. `Room`.
    const KIND: &'static str;
    /// Path segment the collection is mounted at, e.g. `rooms`.
    const COLLECTION: &'static str;
    /// Name reported by the service health check.
    const SERVICE: &'static str;
    /// Message returned when a create payload is rejected.
    const REQUIRED: &'static str;
    const DELETE_POLICY: DeletePolicy;

    fn id(&self) -> i64;

    /// Whether every required field of the draft is present and non-zero.
    fn is_complete(draft: &Self::Draft) -> bool;

    /// Builds the stored record, applying kind-specific defaults.
    fn build(id: i64, draft: Self::Draft) -> Self;

    fn apply(&mut self, patch: Self::Patch);

    fn filter_from_query(_params: &HashMap<String, String>) -> Self::Filter {
        Self::Filter::default()
    }

    fn matches(&self, _filter: &Self::Filter) -> bool {
        true
    }

    /// Terminal transition for [`DeletePolicy::Retire`] kinds.
    fn retire(&mut self) {}

    /// Records the store starts with, and the first id it hands out.
    fn seed() -> (Vec<Self>, i64) {
        (Vec::new(), 1)
    }

    fn not_found_message() -> String {
        format!("{} not found", Self::KIND)
    }
}

use super::{DeletePolicy, Resource};
use crate::service::RequestValidator;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub number: String,
    /// Free-form category such as `single` or `double`.
    #[serde(rename = "type")]
    pub kind: String,
    pub capacity: i64,
    pub available: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewRoom {
    pub number: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub capacity: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RoomPatch {
    pub number: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub capacity: Option<i64>,
    pub available: Option<bool>,
}

/// `?available=true` keeps available rooms; any other value keeps the rest.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RoomFilter {
    pub available: Option<bool>,
}

impl Resource for Room {
    type Draft = NewRoom;
    type Patch = RoomPatch;
    type Filter = RoomFilter;

    const KIND: &'static str = "Room";
    const COLLECTION: &'static str = "rooms";
    const SERVICE: &'static str = "room-service";
    const REQUIRED: &'static str = "number, type and capacity are required";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::Remove;

    fn id(&self) -> i64 {
        self.id
    }

    fn is_complete(draft: &NewRoom) -> bool {
        RequestValidator::has_text(&draft.number)
            && RequestValidator::has_text(&draft.kind)
            && RequestValidator::has_positive(&draft.capacity)
    }

    fn build(id: i64, draft: NewRoom) -> Self {
        Room {
            id,
            number: draft.number.unwrap_or_default(),
            kind: draft.kind.unwrap_or_default(),
            capacity: draft.capacity.unwrap_or_default(),
            available: true,
        }
    }

    fn apply(&mut self, patch: RoomPatch) {
        RequestValidator::apply_text(&mut self.number, patch.number);
        RequestValidator::apply_text(&mut self.kind, patch.kind);
        if let Some(capacity) = patch.capacity.filter(|c| *c > 0) {
            self.capacity = capacity;
        }
        if let Some(available) = patch.available {
            self.available = available;
        }
    }

    fn filter_from_query(params: &HashMap<String, String>) -> RoomFilter {
        RoomFilter {
            available: params
                .get("available")
                .filter(|v| !v.is_empty())
                .map(|v| v == "true"),
        }
    }

    fn matches(&self, filter: &RoomFilter) -> bool {
        filter.available.map_or(true, |want| self.available == want)
    }

    fn seed() -> (Vec<Self>, i64) {
        let room = |id: i64, number: &str, kind: &str, capacity: i64| Room {
            id,
            number: number.into(),
            kind: kind.into(),
            capacity,
            available: true,
        };
        (
            vec![
                room(1, "101", "single", 1),
                room(2, "102", "double", 2),
                room(3, "201", "double", 2),
            ],
            4,
        )
    }
}

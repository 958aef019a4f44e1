use super::{DeletePolicy, Resource};
use crate::service::RequestValidator;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_CANCELLED: &str = "cancelled";

/// A room reservation. `studentId` and `roomId` are opaque; they are not
/// checked against the student or room services.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub student_id: i64,
    pub room_id: i64,
    pub check_in: String,
    pub check_out: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub student_id: Option<i64>,
    pub room_id: Option<i64>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPatch {
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Default)]
pub struct BookingFilter;

impl Resource for Booking {
    type Draft = NewBooking;
    type Patch = BookingPatch;
    type Filter = BookingFilter;

    const KIND: &'static str = "Booking";
    const COLLECTION: &'static str = "bookings";
    const SERVICE: &'static str = "booking-service";
    const REQUIRED: &'static str = "studentId, roomId, checkIn and checkOut are required";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::Retire;

    fn id(&self) -> i64 {
        self.id
    }

    fn is_complete(draft: &NewBooking) -> bool {
        RequestValidator::has_non_zero(&draft.student_id)
            && RequestValidator::has_non_zero(&draft.room_id)
            && RequestValidator::has_text(&draft.check_in)
            && RequestValidator::has_text(&draft.check_out)
    }

    fn build(id: i64, draft: NewBooking) -> Self {
        Booking {
            id,
            student_id: draft.student_id.unwrap_or_default(),
            room_id: draft.room_id.unwrap_or_default(),
            check_in: draft.check_in.unwrap_or_default(),
            check_out: draft.check_out.unwrap_or_default(),
            status: STATUS_ACTIVE.to_string(),
            created_at: Utc::now().trunc_subsecs(0),
        }
    }

    fn apply(&mut self, patch: BookingPatch) {
        RequestValidator::apply_text(&mut self.check_in, patch.check_in);
        RequestValidator::apply_text(&mut self.check_out, patch.check_out);
        RequestValidator::apply_text(&mut self.status, patch.status);
    }

    fn retire(&mut self) {
        self.status = STATUS_CANCELLED.to_string();
    }
}

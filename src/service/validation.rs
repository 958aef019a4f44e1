//! Field checks shared by create and update payloads.
//!
//! A field counts as supplied when it is present and not the zero value for
//! its type, which is the rule both required-field checks on create and
//! partial updates follow.

pub struct RequestValidator;

impl RequestValidator {
    pub fn has_text(value: &Option<String>) -> bool {
        value.as_deref().map(|s| !s.is_empty()).unwrap_or(false)
    }

    pub fn has_non_zero(value: &Option<i64>) -> bool {
        value.map(|n| n != 0).unwrap_or(false)
    }

    pub fn has_positive(value: &Option<i64>) -> bool {
        value.map(|n| n > 0).unwrap_or(false)
    }

    /// Overwrites `target` with `value` when it is supplied text.
    pub fn apply_text(target: &mut String, value: Option<String>) {
        if let Some(v) = value.filter(|s| !s.is_empty()) {
            *target = v;
        }
    }
}

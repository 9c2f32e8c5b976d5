//! Schedule model representing a user's daily fixed times.

use serde::{Deserialize, Serialize};

/// The four fixed times a user anchors their day around.
///
/// Always complete: a schedule is only ever constructed once all four
/// fields have been validated, and it is replaced wholesale on every
/// update. Field names are camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Wake-up time (free-form, e.g. "7am").
    pub wake_up: String,
    /// Lunch time.
    pub lunch: String,
    /// Dinner time.
    pub dinner: String,
    /// Bedtime.
    pub sleep: String,
}

//! Per-session data record.

use super::Schedule;

/// Everything the server remembers about one session.
///
/// The two fields are independent: replacing the schedule never touches
/// previously generated text, and a failed generation never touches either.
#[derive(Debug, Clone, Default)]
pub struct SessionData {
    /// The user's fixed daily times, if they have been set.
    pub schedule: Option<Schedule>,
    /// Text of the most recent successful generation, if any.
    pub generated_schedule: Option<String>,
}

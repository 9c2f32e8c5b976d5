//! Data models for schedulify entities.

mod schedule;
mod session;

pub use schedule::Schedule;
pub use session::SessionData;

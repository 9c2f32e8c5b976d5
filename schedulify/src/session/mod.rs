//! Cookie-identified, time-bounded server-side sessions.
//!
//! Each client gets an opaque UUIDv7 session ID carried in a signed `sid`
//! cookie. The ID keys an in-memory store of [`SessionData`] entries that
//! expire one hour after their last use. Expired or tampered sessions are
//! treated as absent, never as errors - the client simply starts fresh.

pub mod cookie;
mod middleware;
mod store;

pub use middleware::{session_layer, SessionId};
pub use store::{SessionStore, SESSION_TTL};

//! In-memory session store with idle expiry.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::SessionData;

/// Idle lifetime of a session: one hour from last use.
pub const SESSION_TTL: Duration = Duration::from_secs(3600);

struct Entry {
    data: SessionData,
    expires_at: Instant,
}

/// Thread-safe map of session ID to session data.
///
/// An expired entry reads as absent; it is dropped on the next access to
/// its ID, and every write sweeps out all expired entries so abandoned
/// sessions don't accumulate. Concurrent writes to the same session
/// resolve last-write-wins; different sessions never interact.
pub struct SessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<Uuid, Entry>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_ttl(SESSION_TTL)
    }

    /// Create a store with a custom idle lifetime.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Read a session's data, refreshing its idle timer.
    ///
    /// Returns `None` for unknown or expired IDs (and evicts the latter).
    pub async fn get(&self, id: Uuid) -> Option<SessionData> {
        let mut sessions = self.sessions.write().await;
        let now = Instant::now();

        match sessions.get_mut(&id) {
            Some(entry) if entry.expires_at > now => {
                entry.expires_at = now + self.ttl;
                Some(entry.data.clone())
            }
            Some(_) => {
                sessions.remove(&id);
                None
            }
            None => None,
        }
    }

    /// Mutate a session's data in place, creating the entry if needed.
    ///
    /// Every write doubles as a sweep point: all expired entries are
    /// dropped first, so abandoned sessions do not accumulate and the
    /// mutation always starts from either live data or a fresh default.
    pub async fn update<F>(&self, id: Uuid, mutate: F)
    where
        F: FnOnce(&mut SessionData),
    {
        let mut sessions = self.sessions.write().await;
        let now = Instant::now();

        sessions.retain(|_, entry| entry.expires_at > now);

        let entry = sessions.entry(id).or_insert_with(|| Entry {
            data: SessionData::default(),
            expires_at: now + self.ttl,
        });
        mutate(&mut entry.data);
        entry.expires_at = now + self.ttl;
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

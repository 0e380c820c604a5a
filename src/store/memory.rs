use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::debug;
use uuid::Uuid;

use super::base::{PendingLogin, Session, SessionStore};

/// How long a redirect to the provider may stay unanswered before its state
/// stops being accepted at the callback.
const PENDING_TTL_MINUTES: i64 = 10;

#[derive(Default)]
struct Inner {
    pending: HashMap<String, PendingLogin>,
    sessions: HashMap<String, Session>,
}

/// In-memory session store guarding its maps with a mutex. No lock is held
/// across an await point.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            inner: Mutex::new(Inner::default()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn is_expired(pending: &PendingLogin) -> bool {
    Utc::now() - pending.created_at > Duration::minutes(PENDING_TTL_MINUTES)
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn put_pending(&self, state: String, pending: PendingLogin) -> Result<(), String> {
        let mut inner = self.inner.lock().map_err(|e| e.to_string())?;
        // Abandoned logins would otherwise accumulate for the process lifetime.
        inner.pending.retain(|_, p| !is_expired(p));
        inner.pending.insert(state, pending);
        Ok(())
    }

    async fn take_pending(&self, state: &str) -> Result<Option<PendingLogin>, String> {
        let mut inner = self.inner.lock().map_err(|e| e.to_string())?;
        match inner.pending.remove(state) {
            Some(pending) if is_expired(&pending) => {
                debug!("Pending login for state expired, rejecting callback.");
                Ok(None)
            }
            other => Ok(other),
        }
    }

    async fn create_session(&self, session: Session) -> Result<String, String> {
        let id = Uuid::new_v4().to_string();
        let mut inner = self.inner.lock().map_err(|e| e.to_string())?;
        inner.sessions.insert(id.clone(), session);
        Ok(id)
    }

    async fn get_session(&self, id: &str) -> Result<Option<Session>, String> {
        let inner = self.inner.lock().map_err(|e| e.to_string())?;
        Ok(inner.sessions.get(id).cloned())
    }
}

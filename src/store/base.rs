use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::info;

use super::memory::MemoryStore;

/// A login that has been redirected to the provider and is waiting for the
/// callback, keyed in the store by its CSRF state string.
#[derive(Debug, Clone)]
pub struct PendingLogin {
    /// The path originally requested, to return to once the login completes.
    pub return_to: String,
    pub created_at: DateTime<Utc>,
}

impl PendingLogin {
    pub fn new(return_to: impl Into<String>) -> Self {
        PendingLogin {
            return_to: return_to.into(),
            created_at: Utc::now(),
        }
    }
}

/// An established session holding the access token obtained from the code
/// exchange. Lives only as long as the process.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        Session {
            access_token: access_token.into(),
            created_at: Utc::now(),
        }
    }
}

/// The SessionStore trait abstracts session storage: pending logins awaiting
/// their callback, and established sessions addressed by cookie.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Records a login awaiting its provider callback under the CSRF state.
    async fn put_pending(&self, state: String, pending: PendingLogin) -> Result<(), String>;
    /// Consumes the pending login for a state. Returns None for unknown,
    /// already-used, or expired states.
    async fn take_pending(&self, state: &str) -> Result<Option<PendingLogin>, String>;
    /// Stores a new session and returns its generated id.
    async fn create_session(&self, session: Session) -> Result<String, String>;
    /// Looks up an established session by id.
    async fn get_session(&self, id: &str) -> Result<Option<Session>, String>;
}

/// Creates the concrete store implementation. Sessions are in-memory and
/// per-process; nothing survives a restart.
pub fn create_store() -> Arc<dyn SessionStore> {
    info!("Using in-memory session store.");
    Arc::new(MemoryStore::new())
}

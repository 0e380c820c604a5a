//! Shared application state.
//!
//! Contains the state that is shared across all request handlers,
//! including configuration, the OAuth2 client, templates, and sessions.

use std::sync::Arc;

use handlebars::Handlebars;

use crate::config::AppConfig;
use crate::oauth::OAuthClient;
use crate::store::SessionStore;

/// Application state shared across all HTTP handlers.
///
/// This state is cloned for each request handler. Everything in it is
/// read-only after startup except the session store, which guards its own
/// interior mutability.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<AppConfig>,
    /// Authorization-code-flow client for the provider.
    pub oauth: Arc<OAuthClient>,
    /// Template registry with all renderable templates.
    pub templates: Arc<Handlebars<'static>>,
    /// Pending logins and established sessions.
    pub sessions: Arc<dyn SessionStore>,
}

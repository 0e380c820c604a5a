//! Application startup and server initialization.
//!
//! This module handles the creation and configuration of the HTTP server,
//! including the OAuth2 client, the template registry, the session store,
//! and route setup.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::AppConfig;
use crate::oauth::OAuthClient;
use crate::routes;
use crate::state::AppState;
use crate::store::create_store;
use crate::templates;

/// Initializes and runs the application server.
///
/// Builds the template registry, OAuth2 client and session store, binds the
/// configured port and starts serving requests. The actual bound port is
/// logged, which matters when the configured port is 0.
///
/// # Errors
///
/// Returns an error if a template fails to register, an OAuth endpoint URL
/// is invalid, or the server fails to bind the port.
pub async fn run(config: Arc<AppConfig>) -> Result<(), Box<dyn std::error::Error>> {
    let templates = Arc::new(templates::build_registry()?);
    let oauth = Arc::new(OAuthClient::new(&config)?);
    let sessions = create_store();

    let state = AppState {
        config: config.clone(),
        oauth,
        templates,
        sessions,
    };

    let app = routes::create_router(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    let actual_port = listener.local_addr()?.port();
    info!("HTTP server started on port: {}", actual_port);

    axum::serve(listener, app).await?;

    Ok(())
}

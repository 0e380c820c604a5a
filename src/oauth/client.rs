use oauth2::basic::BasicClient;
use oauth2::reqwest::async_http_client;
use oauth2::url::Url;
use oauth2::{
    AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, RedirectUrl, Scope,
    TokenResponse, TokenUrl,
};
use tracing::{debug, info};

use crate::config::AppConfig;

/// The scope requested from the provider during authorization.
pub const OAUTH_SCOPE: &str = "user:email";

/// Authorization-code-flow client for the configured provider (GitHub).
///
/// Built once at startup. Exposes the two operations the auth gate needs:
/// producing an authorization redirect URL, and exchanging a callback code
/// for an access token.
pub struct OAuthClient {
    client: BasicClient,
}

impl OAuthClient {
    /// Constructs the client from the configured credentials and endpoints.
    /// Endpoint or callback URLs that fail to parse are a startup error.
    pub fn new(config: &AppConfig) -> Result<Self, String> {
        let auth_url = AuthUrl::new(config.auth_url.clone())
            .map_err(|e| format!("Invalid authorization endpoint URL: {}", e))?;
        let token_url = TokenUrl::new(config.token_url.clone())
            .map_err(|e| format!("Invalid token endpoint URL: {}", e))?;
        let redirect_url = RedirectUrl::new(config.callback_url.clone())
            .map_err(|e| format!("Invalid callback URL: {}", e))?;

        info!("Creating OAuth2 client for {}", config.auth_url);

        let client = BasicClient::new(
            ClientId::new(config.client_id.clone()),
            Some(ClientSecret::new(config.client_secret.clone())),
            auth_url,
            Some(token_url),
        )
        .set_redirect_uri(redirect_url);

        Ok(OAuthClient { client })
    }

    /// Builds the provider authorization URL with a fresh CSRF state and the
    /// requested scope. The caller is responsible for remembering the state
    /// until the callback arrives.
    pub fn authorize_url(&self) -> (Url, CsrfToken) {
        self.client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new(OAUTH_SCOPE.to_string()))
            .url()
    }

    /// Exchanges an authorization code for an access token at the token
    /// endpoint. Failures are not retried.
    pub async fn exchange_code(&self, code: String) -> Result<String, String> {
        debug!("Exchanging authorization code at token endpoint");
        let token = self
            .client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(async_http_client)
            .await
            .map_err(|e| format!("Code exchange failed: {}", e))?;

        Ok(token.access_token().secret().to_string())
    }
}

use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;

/// Main application config: GitHub OAuth app credentials, listen port,
/// and the OAuth endpoints the client talks to.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct AppConfig {
    /// GitHub OAuth app client id, shown on the index page.
    pub client_id: String,
    /// GitHub OAuth app client secret.
    pub client_secret: String,
    /// TCP port to listen on. Port 0 asks the kernel for a free port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The callback URL registered with the provider.
    #[serde(default = "default_callback_url")]
    pub callback_url: String,
    /// Provider authorization endpoint.
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    /// Provider token endpoint.
    #[serde(default = "default_token_url")]
    pub token_url: String,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_port() -> u16 {
    8080
}

fn default_callback_url() -> String {
    "http://localhost:8080/callback".to_string()
}

fn default_auth_url() -> String {
    "https://github.com/login/oauth/authorize".to_string()
}

fn default_token_url() -> String {
    "https://github.com/login/oauth/access_token".to_string()
}

/// The figment backing `load_config`: an optional "config.yaml" in the
/// current directory, with `CLIENT_ID`, `CLIENT_SECRET` and `PORT` from the
/// process environment merged on top.
pub fn config_figment() -> Figment {
    Figment::new()
        .merge(Yaml::file("./config.yaml"))
        .merge(Env::raw().only(&["client_id", "client_secret", "port"]))
}

/// Load config from the environment and the optional "config.yaml".
/// Missing credentials are a startup failure, not a deferred runtime one.
pub fn load_config() -> AppConfig {
    match config_figment().extract::<AppConfig>() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print the JSON schema for the configuration to stdout.
pub fn print_schema() {
    let schema = schema_for!(AppConfig);
    println!("{}", serde_json::to_string_pretty(&schema).unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::providers::{Format, Yaml};
    use figment::Figment;

    /// Credentials alone are enough; everything else has a default.
    #[test]
    fn test_defaults_applied() {
        let config: AppConfig = Figment::new()
            .merge(Yaml::string(
                r#"
                client_id: "abc"
                client_secret: "shh"
                "#,
            ))
            .extract()
            .expect("config should parse");

        assert_eq!(config.port, 8080);
        assert_eq!(config.callback_url, "http://localhost:8080/callback");
        assert_eq!(config.auth_url, "https://github.com/login/oauth/authorize");
        assert_eq!(
            config.token_url,
            "https://github.com/login/oauth/access_token"
        );
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "console");
    }

    /// A missing client secret must fail extraction rather than produce an
    /// empty credential that only fails once the provider is contacted.
    #[test]
    fn test_missing_secret_is_an_error() {
        let result = Figment::new()
            .merge(Yaml::string(r#"client_id: "abc""#))
            .extract::<AppConfig>();

        assert!(result.is_err(), "Expected missing client_secret to fail");
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let config: AppConfig = Figment::new()
            .merge(Yaml::string(
                r#"
                client_id: "abc"
                client_secret: "shh"
                port: 0
                token_url: "http://127.0.0.1:9999/token"
                logging:
                  level: "debug"
                  format: "json"
                "#,
            ))
            .extract()
            .expect("config should parse");

        assert_eq!(config.port, 0);
        assert_eq!(config.token_url, "http://127.0.0.1:9999/token");
        assert_eq!(config.logging.format, "json");
    }
}

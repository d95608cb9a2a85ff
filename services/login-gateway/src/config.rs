//! Configuration types and loading
//!
//! Provider credential triplets may live in the TOML file or come entirely
//! from `{GOOGLE,KAKAO,NAVER}_{CLIENT_ID,CLIENT_SECRET,REDIRECT_URI}` env
//! vars; env wins field by field so secrets can stay out of the file.
//! Missing credentials pass loading and fail at provider construction,
//! before the listener binds.

use common::Secret;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Root configuration
#[derive(Debug, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

/// Listener and cookie settings
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    /// Domain attribute on the session cookie; deployment-fixed.
    pub cookie_domain: String,
}

/// Credential triplets for all three providers
#[derive(Debug, Default, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub google: ProviderCredentials,
    #[serde(default)]
    pub kakao: ProviderCredentials,
    #[serde(default)]
    pub naver: ProviderCredentials,
}

/// One provider's credential triplet as configured.
///
/// Fields default to empty when omitted from the TOML; validation happens
/// when the provider is constructed from them.
#[derive(Debug, Default, Deserialize)]
pub struct ProviderCredentials {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: Secret<String>,
    #[serde(default)]
    pub redirect_uri: String,
}

impl ProviderCredentials {
    /// Overlay `<PREFIX>_CLIENT_ID` / `_CLIENT_SECRET` / `_REDIRECT_URI`
    /// env vars over the file values, field by field.
    fn overlay_env(&mut self, prefix: &str) {
        if let Ok(value) = std::env::var(format!("{prefix}_CLIENT_ID")) {
            self.client_id = value;
        }
        if let Ok(value) = std::env::var(format!("{prefix}_CLIENT_SECRET")) {
            self.client_secret = Secret::new(value);
        }
        if let Ok(value) = std::env::var(format!("{prefix}_REDIRECT_URI")) {
            self.redirect_uri = value;
        }
    }

    pub fn to_provider_config(&self) -> social_oauth::ProviderConfig {
        social_oauth::ProviderConfig::new(
            self.client_id.clone(),
            self.client_secret.expose().clone(),
            self.redirect_uri.clone(),
        )
    }
}

impl Config {
    /// Load configuration from a TOML file, then overlay environment
    /// variables for each provider.
    pub fn load(path: &Path) -> common::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&contents)?;

        config.providers.google.overlay_env("GOOGLE");
        config.providers.kakao.overlay_env("KAKAO");
        config.providers.naver.overlay_env("NAVER");

        if config.server.cookie_domain.is_empty() {
            return Err(common::Error::Config(
                "cookie_domain must not be empty".into(),
            ));
        }

        Ok(config)
    }

    /// Resolve config file path from CLI arg or CONFIG_PATH env var.
    pub fn resolve_path(cli_path: Option<&str>) -> PathBuf {
        if let Some(p) = cli_path {
            return PathBuf::from(p);
        }
        if let Ok(p) = std::env::var("CONFIG_PATH") {
            return PathBuf::from(p);
        }
        PathBuf::from("login-gateway.toml")
    }
}

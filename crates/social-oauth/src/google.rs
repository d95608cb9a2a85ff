//! Google OAuth provider
//!
//! API contract: <https://developers.google.com/identity/protocols/oauth2/web-server>.
//! Google is the only variant that sends an explicit `scope` parameter in
//! the authorization URL (userinfo profile + email). The avatar is the
//! top-level `picture` field of the userinfo response.

use serde::Deserialize;

use crate::config::ProviderConfig;
use crate::error::Result;
use crate::identity::ProviderIdentity;
use crate::provider::{OAuthProvider, ProfileResponse, TokenResponse, decode_json, encode_query};

/// Authorization endpoint (browser redirect target)
pub const GOOGLE_AUTHORIZE_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// Token endpoint for the code exchange (POST, form-encoded)
pub const GOOGLE_TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";

/// Userinfo endpoint
pub const GOOGLE_PROFILE_ENDPOINT: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

/// Scopes requested in the authorization URL: basic profile and email.
pub const GOOGLE_SCOPES: &str =
    "https://www.googleapis.com/auth/userinfo.profile https://www.googleapis.com/auth/userinfo.email";

/// Google token endpoint response.
#[derive(Debug, Deserialize)]
pub struct GoogleToken {
    pub access_token: Option<String>,
    pub expires_in: Option<u64>,
    pub scope: Option<String>,
    pub token_type: Option<String>,
    pub refresh_token: Option<String>,
}

impl TokenResponse for GoogleToken {
    fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

/// Google userinfo response (`/oauth2/v3/userinfo`).
#[derive(Debug, Deserialize)]
pub struct GoogleProfile {
    pub id: Option<String>,
    pub email: Option<String>,
    pub verified_email: Option<bool>,
    pub name: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub picture: Option<String>,
    pub locale: Option<String>,
}

impl ProfileResponse for GoogleProfile {
    fn avatar_url(&self) -> Option<&str> {
        self.picture.as_deref()
    }
}

/// Google variant of the authorization-code flow.
pub struct GoogleProvider {
    config: ProviderConfig,
    authorize_endpoint: String,
    token_endpoint: String,
    profile_endpoint: String,
}

impl GoogleProvider {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        Self::with_endpoints(
            config,
            GOOGLE_AUTHORIZE_ENDPOINT,
            GOOGLE_TOKEN_ENDPOINT,
            GOOGLE_PROFILE_ENDPOINT,
        )
    }

    /// Same construction with endpoint overrides, for tests that point the
    /// provider at a stub server.
    pub fn with_endpoints(
        config: ProviderConfig,
        authorize: &str,
        token: &str,
        profile: &str,
    ) -> Result<Self> {
        config.validate(ProviderIdentity::Google)?;
        Ok(Self {
            config,
            authorize_endpoint: authorize.into(),
            token_endpoint: token.into(),
            profile_endpoint: profile.into(),
        })
    }
}

impl OAuthProvider for GoogleProvider {
    type Token = GoogleToken;
    type Profile = GoogleProfile;

    fn identity(&self) -> ProviderIdentity {
        ProviderIdentity::Google
    }

    fn authorization_url(&self) -> String {
        let query = encode_query(&[
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("response_type", "code"),
            ("scope", GOOGLE_SCOPES),
        ]);
        format!("{}?{}", self.authorize_endpoint, query)
    }

    async fn exchange_code(&self, client: &reqwest::Client, code: &str) -> Result<GoogleToken> {
        let request = client.post(&self.token_endpoint).form(&[
            ("grant_type", "authorization_code"),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("code", code),
        ]);
        decode_json(request, "google token exchange").await
    }

    async fn fetch_profile(
        &self,
        client: &reqwest::Client,
        access_token: &str,
    ) -> Result<GoogleProfile> {
        let request = client.get(&self.profile_endpoint).bearer_auth(access_token);
        decode_json(request, "google profile fetch").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> GoogleProvider {
        GoogleProvider::new(ProviderConfig::new(
            "google-client-id.apps.googleusercontent.com",
            "google-secret",
            "http://127.0.0.1:8080/oauth/google/callback",
        ))
        .unwrap()
    }

    #[test]
    fn authorization_url_contains_required_params() {
        let url = provider().authorization_url();
        assert!(url.starts_with(GOOGLE_AUTHORIZE_ENDPOINT));
        assert!(url.contains("client_id=google-client-id.apps.googleusercontent.com"));
        assert!(url.contains("redirect_uri=http%3A%2F%2F127.0.0.1%3A8080%2Foauth%2Fgoogle%2Fcallback"));
        assert!(url.contains("response_type=code"));
    }

    #[test]
    fn authorization_url_requests_both_userinfo_scopes() {
        let url = provider().authorization_url();
        assert!(url.contains("scope="));
        assert!(url.contains(&urlencoding::encode(
            "https://www.googleapis.com/auth/userinfo.profile"
        ).into_owned()));
        assert!(url.contains(&urlencoding::encode(
            "https://www.googleapis.com/auth/userinfo.email"
        ).into_owned()));
    }

    #[test]
    fn empty_credential_field_fails_construction() {
        assert!(GoogleProvider::new(ProviderConfig::new("id", "secret", "")).is_err());
    }

    #[test]
    fn token_decodes_success_response() {
        let json = r#"{
            "access_token": "ya29.a0AfH6SMC",
            "expires_in": 3599,
            "scope": "openid",
            "token_type": "Bearer"
        }"#;
        let token: GoogleToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token(), Some("ya29.a0AfH6SMC"));
        assert_eq!(token.refresh_token, None);
    }

    #[test]
    fn token_decodes_error_body_without_access_token() {
        let json = r#"{"error":"invalid_grant","error_description":"Bad Request"}"#;
        let token: GoogleToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token(), None);
    }

    #[test]
    fn avatar_is_the_top_level_picture_field() {
        let profile: GoogleProfile = serde_json::from_str(
            r#"{"name":"Jane Doe","picture":"https://lh3.googleusercontent.com/photo.jpg"}"#,
        )
        .unwrap();
        assert_eq!(
            profile.avatar_url(),
            Some("https://lh3.googleusercontent.com/photo.jpg")
        );
    }

    #[test]
    fn missing_picture_yields_no_avatar() {
        let profile: GoogleProfile =
            serde_json::from_str(r#"{"email":"jane@example.com"}"#).unwrap();
        assert_eq!(profile.avatar_url(), None);
    }
}

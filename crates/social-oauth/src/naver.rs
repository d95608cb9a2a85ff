//! Naver OAuth provider
//!
//! API contract: <https://developers.naver.com/docs/login/api/api.md>.
//! Unlike Kakao and Google, Naver's token grant is a GET with the
//! parameters in the query string — a provider-mandated asymmetry that
//! must not be unified away. The profile lives under
//! `response.profile_image`.

use serde::Deserialize;

use crate::config::ProviderConfig;
use crate::error::Result;
use crate::identity::ProviderIdentity;
use crate::provider::{OAuthProvider, ProfileResponse, TokenResponse, decode_json, encode_query};

/// Authorization endpoint (browser redirect target)
pub const NAVER_AUTHORIZE_ENDPOINT: &str = "https://nid.naver.com/oauth2.0/authorize";

/// Token endpoint for the code exchange (GET, query parameters)
pub const NAVER_TOKEN_ENDPOINT: &str = "https://nid.naver.com/oauth2.0/token";

/// Userinfo endpoint
pub const NAVER_PROFILE_ENDPOINT: &str = "https://openapi.naver.com/v1/nid/me";

/// Naver token endpoint response.
///
/// Naver reports grant failures with 200 + `error`/`error_description`
/// fields, so the error shape is part of the declared contract rather than
/// an out-of-band body.
#[derive(Debug, Deserialize)]
pub struct NaverToken {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl TokenResponse for NaverToken {
    fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

/// Naver userinfo response (`/v1/nid/me`).
#[derive(Debug, Deserialize)]
pub struct NaverProfile {
    pub resultcode: Option<String>,
    pub message: Option<String>,
    pub response: Option<NaverAccount>,
}

#[derive(Debug, Deserialize)]
pub struct NaverAccount {
    pub id: Option<String>,
    pub nickname: Option<String>,
    pub profile_image: Option<String>,
    pub email: Option<String>,
}

impl ProfileResponse for NaverProfile {
    fn avatar_url(&self) -> Option<&str> {
        self.response.as_ref()?.profile_image.as_deref()
    }
}

/// Naver variant of the authorization-code flow.
pub struct NaverProvider {
    config: ProviderConfig,
    authorize_endpoint: String,
    token_endpoint: String,
    profile_endpoint: String,
}

impl NaverProvider {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        Self::with_endpoints(
            config,
            NAVER_AUTHORIZE_ENDPOINT,
            NAVER_TOKEN_ENDPOINT,
            NAVER_PROFILE_ENDPOINT,
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
        config.validate(ProviderIdentity::Naver)?;
        Ok(Self {
            config,
            authorize_endpoint: authorize.into(),
            token_endpoint: token.into(),
            profile_endpoint: profile.into(),
        })
    }
}

impl OAuthProvider for NaverProvider {
    type Token = NaverToken;
    type Profile = NaverProfile;

    fn identity(&self) -> ProviderIdentity {
        ProviderIdentity::Naver
    }

    fn authorization_url(&self) -> String {
        // Default scope applies; no scope parameter is sent.
        let query = encode_query(&[
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("response_type", "code"),
        ]);
        format!("{}?{}", self.authorize_endpoint, query)
    }

    async fn exchange_code(&self, client: &reqwest::Client, code: &str) -> Result<NaverToken> {
        // Naver mandates GET with query-string parameters for the grant.
        let request = client.get(&self.token_endpoint).query(&[
            ("grant_type", "authorization_code"),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("code", code),
        ]);
        decode_json(request, "naver token exchange").await
    }

    async fn fetch_profile(
        &self,
        client: &reqwest::Client,
        access_token: &str,
    ) -> Result<NaverProfile> {
        let request = client.get(&self.profile_endpoint).bearer_auth(access_token);
        decode_json(request, "naver profile fetch").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> NaverProvider {
        NaverProvider::new(ProviderConfig::new(
            "naver-client-id",
            "naver-secret",
            "http://127.0.0.1:8080/oauth/naver/callback",
        ))
        .unwrap()
    }

    #[test]
    fn authorization_url_contains_required_params() {
        let url = provider().authorization_url();
        assert!(url.starts_with(NAVER_AUTHORIZE_ENDPOINT));
        assert!(url.contains("client_id=naver-client-id"));
        assert!(url.contains("redirect_uri=http%3A%2F%2F127.0.0.1%3A8080%2Foauth%2Fnaver%2Fcallback"));
        assert!(url.contains("response_type=code"));
        assert!(!url.contains("scope="), "naver uses its default scope");
    }

    #[test]
    fn empty_credential_field_fails_construction() {
        assert!(NaverProvider::new(ProviderConfig::new("id", "", "uri")).is_err());
    }

    #[test]
    fn token_decodes_success_response() {
        let json = r#"{
            "access_token": "AAAAQosjWDJieBiQZc3to9YQp6HDLvrmyKC+6+iZ3gq7qrkqf50ljZC+Lgoqrg",
            "refresh_token": "c8ceMEJisO4Se7uGisHoX0f5JEii7JnipglQipkOn5Zp3tyP7dHQoP0zNKHUq2gY",
            "token_type": "bearer",
            "expires_in": 3600
        }"#;
        let token: NaverToken = serde_json::from_str(json).unwrap();
        assert!(token.access_token().is_some());
        assert_eq!(token.error, None);
    }

    #[test]
    fn token_decodes_declared_error_shape() {
        let json = r#"{"error":"invalid_request","error_description":"no valid data in session"}"#;
        let token: NaverToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token(), None);
        assert_eq!(token.error.as_deref(), Some("invalid_request"));
    }

    #[test]
    fn avatar_extraction_follows_response_path() {
        let json = r#"{
            "resultcode": "00",
            "message": "success",
            "response": {
                "id": "32742776",
                "nickname": "openapi",
                "profile_image": "https://ssl.pstatic.net/static/pwe/address/nodata_33x33.gif",
                "email": "openapi@naver.com"
            }
        }"#;
        let profile: NaverProfile = serde_json::from_str(json).unwrap();
        assert_eq!(
            profile.avatar_url(),
            Some("https://ssl.pstatic.net/static/pwe/address/nodata_33x33.gif")
        );
    }

    #[test]
    fn avatar_extraction_is_null_safe() {
        let no_response: NaverProfile =
            serde_json::from_str(r#"{"resultcode":"024","message":"Authentication failed"}"#)
                .unwrap();
        assert_eq!(no_response.avatar_url(), None);

        let no_image: NaverProfile =
            serde_json::from_str(r#"{"response":{"id":"1"}}"#).unwrap();
        assert_eq!(no_image.avatar_url(), None);
    }

    #[test]
    fn empty_profile_image_decodes_as_empty_string() {
        // The registry turns the empty string into "no image"; the raw
        // decode keeps it verbatim.
        let profile: NaverProfile =
            serde_json::from_str(r#"{"response":{"profile_image":""}}"#).unwrap();
        assert_eq!(profile.avatar_url(), Some(""));
    }
}

//! Kakao OAuth provider
//!
//! REST API contract: <https://developers.kakao.com/docs/latest/ko/kakaologin/rest-api>.
//! Token grant is a form-encoded POST; the profile lives under
//! `kakao_account.profile.profile_image_url`.

use serde::Deserialize;

use crate::config::ProviderConfig;
use crate::error::Result;
use crate::identity::ProviderIdentity;
use crate::provider::{OAuthProvider, ProfileResponse, TokenResponse, decode_json, encode_query};

/// Authorization endpoint (browser redirect target)
pub const KAKAO_AUTHORIZE_ENDPOINT: &str = "https://kauth.kakao.com/oauth/authorize";

/// Token endpoint for the code exchange (POST, form-encoded)
pub const KAKAO_TOKEN_ENDPOINT: &str = "https://kauth.kakao.com/oauth/token";

/// Userinfo endpoint
pub const KAKAO_PROFILE_ENDPOINT: &str = "https://kapi.kakao.com/v2/user/me";

/// Kakao token endpoint response.
///
/// Every field is optional so that a JSON error body (no `access_token`)
/// still decodes; the fields beyond `access_token` are carried as opaque
/// passthrough per the provider contract.
#[derive(Debug, Deserialize)]
pub struct KakaoToken {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
    pub refresh_token: Option<String>,
    pub refresh_token_expires_in: Option<u64>,
    pub scope: Option<String>,
    pub id_token: Option<String>,
}

impl TokenResponse for KakaoToken {
    fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

/// Kakao userinfo response (`/v2/user/me`).
#[derive(Debug, Deserialize)]
pub struct KakaoProfile {
    pub id: Option<i64>,
    pub kakao_account: Option<KakaoAccount>,
}

#[derive(Debug, Deserialize)]
pub struct KakaoAccount {
    pub profile: Option<KakaoAccountProfile>,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct KakaoAccountProfile {
    pub nickname: Option<String>,
    pub profile_image_url: Option<String>,
}

impl ProfileResponse for KakaoProfile {
    fn avatar_url(&self) -> Option<&str> {
        self.kakao_account
            .as_ref()?
            .profile
            .as_ref()?
            .profile_image_url
            .as_deref()
    }
}

/// Kakao variant of the authorization-code flow.
pub struct KakaoProvider {
    config: ProviderConfig,
    authorize_endpoint: String,
    token_endpoint: String,
    profile_endpoint: String,
}

impl KakaoProvider {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        Self::with_endpoints(
            config,
            KAKAO_AUTHORIZE_ENDPOINT,
            KAKAO_TOKEN_ENDPOINT,
            KAKAO_PROFILE_ENDPOINT,
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
        config.validate(ProviderIdentity::Kakao)?;
        Ok(Self {
            config,
            authorize_endpoint: authorize.into(),
            token_endpoint: token.into(),
            profile_endpoint: profile.into(),
        })
    }
}

impl OAuthProvider for KakaoProvider {
    type Token = KakaoToken;
    type Profile = KakaoProfile;

    fn identity(&self) -> ProviderIdentity {
        ProviderIdentity::Kakao
    }

    fn authorization_url(&self) -> String {
        // Kakao relies on its default scope; no scope parameter is sent.
        let query = encode_query(&[
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("response_type", "code"),
        ]);
        format!("{}?{}", self.authorize_endpoint, query)
    }

    async fn exchange_code(&self, client: &reqwest::Client, code: &str) -> Result<KakaoToken> {
        let request = client.post(&self.token_endpoint).form(&[
            ("grant_type", "authorization_code"),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("code", code),
        ]);
        decode_json(request, "kakao token exchange").await
    }

    async fn fetch_profile(
        &self,
        client: &reqwest::Client,
        access_token: &str,
    ) -> Result<KakaoProfile> {
        let request = client.get(&self.profile_endpoint).bearer_auth(access_token);
        decode_json(request, "kakao profile fetch").await
    }
}

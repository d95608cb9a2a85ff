//! Provider registry
//!
//! One instance of each provider, constructed once at startup and shared
//! across requests. The registry is the gateway's single dispatch point:
//! every operation is keyed by [`ProviderIdentity`], and the per-provider
//! token/profile shapes stay inside this crate — the gateway only sees the
//! access token and the avatar URL.

use crate::config::ProviderConfig;
use crate::error::Result;
use crate::google::GoogleProvider;
use crate::identity::ProviderIdentity;
use crate::kakao::KakaoProvider;
use crate::naver::NaverProvider;
use crate::provider::{OAuthProvider, ProfileResponse, TokenResponse};
use crate::session::Session;

/// Lookup from provider identity to a constructed provider.
pub struct ProviderRegistry {
    google: GoogleProvider,
    kakao: KakaoProvider,
    naver: NaverProvider,
}

impl ProviderRegistry {
    pub fn new(google: GoogleProvider, kakao: KakaoProvider, naver: NaverProvider) -> Self {
        Self {
            google,
            kakao,
            naver,
        }
    }

    /// Construct all three providers from their credential triplets.
    /// Fails with a configuration error if any field is empty.
    pub fn from_configs(
        google: ProviderConfig,
        kakao: ProviderConfig,
        naver: ProviderConfig,
    ) -> Result<Self> {
        Ok(Self::new(
            GoogleProvider::new(google)?,
            KakaoProvider::new(kakao)?,
            NaverProvider::new(naver)?,
        ))
    }

    /// Sign-in URL for the given provider.
    pub fn authorization_url(&self, identity: ProviderIdentity) -> String {
        match identity {
            ProviderIdentity::Google => self.google.authorization_url(),
            ProviderIdentity::Kakao => self.kakao.authorization_url(),
            ProviderIdentity::Naver => self.naver.authorization_url(),
        }
    }

    /// Exchange a callback code for an access token.
    ///
    /// `Ok(None)` means the provider answered with a token response that
    /// carries no access token (a rejected grant) — a login failure the
    /// caller reports to the user, never retried.
    pub async fn exchange_access_token(
        &self,
        client: &reqwest::Client,
        identity: ProviderIdentity,
        code: &str,
    ) -> Result<Option<String>> {
        let token = match identity {
            ProviderIdentity::Google => self
                .google
                .exchange_code(client, code)
                .await?
                .access_token()
                .map(str::to_owned),
            ProviderIdentity::Kakao => self
                .kakao
                .exchange_code(client, code)
                .await?
                .access_token()
                .map(str::to_owned),
            ProviderIdentity::Naver => self
                .naver
                .exchange_code(client, code)
                .await?
                .access_token()
                .map(str::to_owned),
        };
        Ok(token)
    }

    /// Fetch the profile for a session's provider and extract the avatar
    /// URL. `Ok(None)` covers both an absent avatar path and an empty
    /// string — "no image" is a rendering decision, not a failure.
    pub async fn fetch_avatar_url(
        &self,
        client: &reqwest::Client,
        session: &Session,
    ) -> Result<Option<String>> {
        let avatar = match session.provider {
            ProviderIdentity::Google => self
                .google
                .fetch_profile(client, &session.token)
                .await?
                .avatar_url()
                .map(str::to_owned),
            ProviderIdentity::Kakao => self
                .kakao
                .fetch_profile(client, &session.token)
                .await?
                .avatar_url()
                .map(str::to_owned),
            ProviderIdentity::Naver => self
                .naver
                .fetch_profile(client, &session.token)
                .await?
                .avatar_url()
                .map(str::to_owned),
        };
        Ok(avatar.filter(|url| !url.is_empty()))
    }
}

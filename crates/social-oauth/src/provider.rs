//! Provider abstraction for the authorization-code flow
//!
//! Defines the `OAuthProvider` trait that the three concrete providers
//! implement. Each provider carries its own token and profile response
//! shapes as distinct types; the `TokenResponse` / `ProfileResponse`
//! traits expose the two fields the gateway actually relies on (the
//! access token and the avatar URL) without flattening the rest of the
//! provider contract.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Error, Result};
use crate::identity::ProviderIdentity;

/// Uniform view of a provider's token endpoint response.
///
/// `access_token` is the only field the flow depends on; a response
/// without it (a JSON error body, typically) is a login failure the
/// gateway reports to the user.
pub trait TokenResponse {
    fn access_token(&self) -> Option<&str>;
}

/// Uniform view of a provider's userinfo response.
///
/// The avatar path differs per provider and may be absent at any level
/// of nesting; extraction is null-safe and an absent path means "no
/// image", never a failure.
pub trait ProfileResponse {
    fn avatar_url(&self) -> Option<&str>;
}

/// One identity provider's view of the authorization-code flow.
///
/// `authorization_url` is a pure function of the stored configuration.
/// The two network operations make exactly one outbound call each, with
/// no retry and no explicit timeout; transport and decode failures
/// surface as [`Error::Integration`].
pub trait OAuthProvider {
    type Token: TokenResponse + DeserializeOwned;
    type Profile: ProfileResponse + DeserializeOwned;

    fn identity(&self) -> ProviderIdentity;

    /// Build the provider's sign-in URL. Deterministic, no side effects.
    fn authorization_url(&self) -> String;

    /// Exchange a one-time authorization code for the provider's token
    /// response, decoded verbatim — including JSON error bodies returned
    /// with a non-2xx status.
    async fn exchange_code(&self, client: &reqwest::Client, code: &str) -> Result<Self::Token>;

    /// Fetch the provider profile with a bearer token.
    async fn fetch_profile(
        &self,
        client: &reqwest::Client,
        access_token: &str,
    ) -> Result<Self::Profile>;
}

/// Percent-encode query parameters into `k=v&k=v` form.
pub(crate) fn encode_query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Send a prepared request and decode the JSON body regardless of HTTP
/// status. Token endpoints answer a bad grant with a JSON error body and a
/// non-2xx status; the body is decoded either way so the caller can inspect
/// the missing `access_token` instead of losing the response.
pub(crate) async fn decode_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    context: &str,
) -> Result<T> {
    let response = request
        .send()
        .await
        .map_err(|e| Error::integration(format!("{context} request failed"), e))?;

    debug!(status = response.status().as_u16(), "{context} response received");

    response
        .json::<T>()
        .await
        .map_err(|e| Error::integration(format!("{context} response did not decode"), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_query_joins_pairs() {
        let query = encode_query(&[("client_id", "abc"), ("response_type", "code")]);
        assert_eq!(query, "client_id=abc&response_type=code");
    }

    #[test]
    fn encode_query_escapes_reserved_characters() {
        let query = encode_query(&[("redirect_uri", "http://127.0.0.1:8080/oauth/kakao/callback")]);
        assert_eq!(
            query,
            "redirect_uri=http%3A%2F%2F127.0.0.1%3A8080%2Foauth%2Fkakao%2Fcallback"
        );
    }

    #[test]
    fn encode_query_escapes_spaces_in_scopes() {
        let query = encode_query(&[("scope", "profile email")]);
        assert_eq!(query, "scope=profile%20email");
    }
}

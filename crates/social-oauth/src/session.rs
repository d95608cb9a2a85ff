//! Session value codec
//!
//! The session is the minimal caller-held state identifying which provider
//! and access token represent the current user. It serializes as
//! `"<provider>:<token>"` and lives entirely in the transport cookie the
//! gateway hands to the browser — nothing is persisted server-side.

use crate::identity::ProviderIdentity;

/// Provider + access token pair for the current browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub provider: ProviderIdentity,
    pub token: String,
}

impl Session {
    pub fn new(provider: ProviderIdentity, token: impl Into<String>) -> Self {
        Self {
            provider,
            token: token.into(),
        }
    }

    /// Serialize as `"<provider>:<token>"`.
    ///
    /// No escaping is applied: provider access tokens are opaque
    /// base64/alphanumeric strings and are assumed never to contain the
    /// `:` separator.
    pub fn encode(&self) -> String {
        format!("{}:{}", self.provider, self.token)
    }

    /// Split on the first colon. A value without a colon, or with a
    /// provider label that is not a known [`ProviderIdentity`], is
    /// malformed and decodes to `None` — the caller treats it exactly
    /// like an absent session.
    pub fn decode(raw: &str) -> Option<Self> {
        let (label, token) = raw.split_once(':')?;
        let provider = ProviderIdentity::parse(label)?;
        Some(Self::new(provider, token))
    }
}

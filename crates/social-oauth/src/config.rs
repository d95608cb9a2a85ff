//! Per-provider credential configuration

use crate::error::{Error, Result};
use crate::identity::ProviderIdentity;

/// Static credentials for one provider: the OAuth client id/secret issued
/// by the provider console and the redirect URI registered there.
///
/// Carries no logic beyond validation. Construction of a provider with any
/// empty field fails fast with [`Error::Configuration`]; validation is not
/// deferred to first use.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl ProviderConfig {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
        }
    }

    /// Reject empty credential fields before any network capability is used.
    pub(crate) fn validate(&self, identity: ProviderIdentity) -> Result<()> {
        let fields = [
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("redirect_uri", &self.redirect_uri),
        ];
        for (name, value) in fields {
            if value.is_empty() {
                return Err(Error::Configuration(format!(
                    "{identity}: {name} must not be empty"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_config_validates() {
        let config = ProviderConfig::new("id", "secret", "http://127.0.0.1/cb");
        assert!(config.validate(ProviderIdentity::Kakao).is_ok());
    }

    #[test]
    fn each_empty_field_is_rejected() {
        let cases = [
            (ProviderConfig::new("", "secret", "uri"), "client_id"),
            (ProviderConfig::new("id", "", "uri"), "client_secret"),
            (ProviderConfig::new("id", "secret", ""), "redirect_uri"),
        ];
        for (config, field) in cases {
            let err = config.validate(ProviderIdentity::Naver).unwrap_err();
            let message = err.to_string();
            assert!(
                message.contains(field) && message.contains("naver"),
                "error should name the offending field and provider, got: {message}"
            );
        }
    }
}

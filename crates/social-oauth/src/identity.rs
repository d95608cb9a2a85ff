//! Provider identity
//!
//! The closed set of supported identity providers. The identity doubles as
//! the wire label used in the session value (`"<provider>:<token>"`) and in
//! the callback URL path (`/oauth/<provider>/callback`).

use std::fmt;

/// One of the supported identity providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderIdentity {
    Google,
    Kakao,
    Naver,
}

impl ProviderIdentity {
    /// All providers, in the order the login page lists them.
    pub const ALL: [ProviderIdentity; 3] = [
        ProviderIdentity::Kakao,
        ProviderIdentity::Naver,
        ProviderIdentity::Google,
    ];

    /// Wire label for this provider.
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderIdentity::Google => "google",
            ProviderIdentity::Kakao => "kakao",
            ProviderIdentity::Naver => "naver",
        }
    }

    /// Parse a wire label. Unknown labels yield `None` — callers treat
    /// them the same as an absent value.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "google" => Some(ProviderIdentity::Google),
            "kakao" => Some(ProviderIdentity::Kakao),
            "naver" => Some(ProviderIdentity::Naver),
            _ => None,
        }
    }
}

impl fmt::Display for ProviderIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for identity in ProviderIdentity::ALL {
            assert_eq!(ProviderIdentity::parse(identity.as_str()), Some(identity));
        }
    }

    #[test]
    fn unknown_label_yields_none() {
        assert_eq!(ProviderIdentity::parse("github"), None);
        assert_eq!(ProviderIdentity::parse(""), None);
        assert_eq!(ProviderIdentity::parse("Kakao"), None, "labels are case-sensitive");
    }

    #[test]
    fn display_matches_wire_label() {
        assert_eq!(ProviderIdentity::Google.to_string(), "google");
        assert_eq!(ProviderIdentity::Kakao.to_string(), "kakao");
        assert_eq!(ProviderIdentity::Naver.to_string(), "naver");
    }
}

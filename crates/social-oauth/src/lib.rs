//! Social login OAuth provider library
//!
//! Implements the OAuth 2.0 authorization-code flow against three identity
//! providers (Google, Kakao, Naver): building authorization URLs, exchanging
//! a one-time code for an access token, and fetching the provider profile
//! with that token. The HTTP client is caller-supplied; this crate performs
//! no routing and no cookie handling, so it can be tested and used
//! independently of the gateway binary.
//!
//! Login flow:
//! 1. Gateway renders one `ProviderRegistry::authorization_url()` per provider
//! 2. The provider redirects back to the gateway with a one-time `code`
//! 3. Gateway calls `ProviderRegistry::exchange_access_token()` with the code
//! 4. The session is serialized via `Session::encode()` into the transport cookie
//! 5. Subsequent requests decode the session and call
//!    `ProviderRegistry::fetch_avatar_url()` with the stored token

pub mod config;
pub mod error;
pub mod google;
pub mod identity;
pub mod kakao;
pub mod naver;
pub mod provider;
pub mod registry;
pub mod session;

pub use config::ProviderConfig;
pub use error::{Error, Result};
pub use google::GoogleProvider;
pub use identity::ProviderIdentity;
pub use kakao::KakaoProvider;
pub use naver::NaverProvider;
pub use provider::{OAuthProvider, ProfileResponse, TokenResponse};
pub use registry::ProviderRegistry;
pub use session::Session;

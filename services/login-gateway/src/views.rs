//! Inline HTML fragments for the three pages.
//!
//! The markup is small enough that a templating engine would be overhead;
//! each view is a plain string builder.

use social_oauth::{ProviderIdentity, Session};

pub fn anonymous_home() -> String {
    "<h1>Social Login</h1>\n<p>You are not signed in.</p>\n<a href=\"/login\">Sign in</a>\n"
        .to_string()
}

/// One anchor per provider, in login-page order.
pub fn login_page(links: &[(ProviderIdentity, String)]) -> String {
    let mut anchors = String::new();
    for (identity, url) in links {
        anchors.push_str(&format!(
            "<p><a href=\"{url}\">Sign in with {identity}</a></p>\n"
        ));
    }
    format!("<h1>Login</h1>\n<div>\n{anchors}</div>\n")
}

/// Home page for an authenticated browser: provider, token, and avatar.
/// The avatar image is rendered only when a URL is present; an account
/// without one still signs in.
pub fn authenticated_home(session: &Session, avatar_url: Option<&str>) -> String {
    let avatar = match avatar_url {
        Some(url) => format!("<img src=\"{url}\" width=\"128\" height=\"128\" />\n"),
        None => String::new(),
    };
    format!(
        "<h1>Social Login</h1>\n<div>\n<p>provider: {}</p>\n<p>token: {}</p>\n{avatar}<a href=\"/logout\">Sign out</a>\n</div>\n",
        session.provider, session.token
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_page_renders_one_anchor_per_provider() {
        let links = [
            (ProviderIdentity::Kakao, "https://kakao.example/a".to_string()),
            (ProviderIdentity::Naver, "https://naver.example/a".to_string()),
            (ProviderIdentity::Google, "https://google.example/a".to_string()),
        ];
        let html = login_page(&links);
        assert!(html.contains("https://kakao.example/a"));
        assert!(html.contains("Sign in with naver"));
        assert!(html.contains("Sign in with google"));
    }

    #[test]
    fn authenticated_home_renders_provider_token_and_avatar() {
        let session = Session::new(ProviderIdentity::Kakao, "tok".to_string());
        let html = authenticated_home(&session, Some("https://img.example/me.png"));
        assert!(html.contains("<img src=\"https://img.example/me.png\""));
        assert!(html.contains("provider: kakao"));
        assert!(html.contains("token: tok"));
    }

    #[test]
    fn authenticated_home_omits_avatar_when_absent() {
        let session = Session::new(ProviderIdentity::Naver, "tok".to_string());
        let html = authenticated_home(&session, None);
        assert!(!html.contains("<img"));
        assert!(html.contains("/logout"));
    }
}

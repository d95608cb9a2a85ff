//! HTTP surface of the login flow
//!
//! Each request stands alone: the only state the gateway holds for a
//! browser is the session cookie the browser carries. Handlers delegate
//! protocol work to the provider registry and report per-request failures
//! as JSON `{"message"}` bodies rather than bubbling them as errors.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use tracing::{info, warn};

use social_oauth::{ProviderIdentity, ProviderRegistry, Session};

use crate::views;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "user";

/// Session cookie lifetime in seconds.
pub const SESSION_TTL_SECS: i64 = 3600;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ProviderRegistry>,
    pub http: reqwest::Client,
    pub cookie_domain: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/login", get(login))
        .route("/logout", get(logout))
        .route("/oauth/{provider}/callback", get(callback))
        .with_state(state)
}

fn message_json(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "message": message }))).into_response()
}

/// Session cookie with the attributes every set and removal must share.
fn session_cookie(state: &AppState, value: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .domain(state.cookie_domain.clone())
        .secure(true)
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(SESSION_TTL_SECS))
        .build()
}

/// `/` — profile page when a session cookie decodes, anonymous page
/// otherwise. A malformed or unrecognized cookie is treated as absent.
async fn home(State(state): State<AppState>, jar: CookieJar) -> Response {
    let session = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| Session::decode(cookie.value()));

    let Some(session) = session else {
        return Html(views::anonymous_home()).into_response();
    };

    match state.registry.fetch_avatar_url(&state.http, &session).await {
        Ok(avatar) => {
            Html(views::authenticated_home(&session, avatar.as_deref())).into_response()
        }
        Err(error) => {
            warn!(provider = %session.provider, %error, "profile fetch failed");
            message_json(
                StatusCode::BAD_GATEWAY,
                "failed to load your profile from the provider",
            )
        }
    }
}

/// `/login` — one authorization link per provider.
async fn login(State(state): State<AppState>) -> Html<String> {
    let links =
        ProviderIdentity::ALL.map(|identity| (identity, state.registry.authorization_url(identity)));
    Html(views::login_page(&links))
}

/// `/logout` — drop the session cookie and go home. Removal must carry
/// the same path and domain the cookie was set with.
async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    let jar = jar.remove(session_cookie(&state, String::new()));
    (jar, Redirect::to("/"))
}

#[derive(Debug, Deserialize)]
struct CallbackQuery {
    code: Option<String>,
}

/// `/oauth/{provider}/callback` — exchange the authorization code for an
/// access token and establish the session.
async fn callback(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    Query(query): Query<CallbackQuery>,
    jar: CookieJar,
) -> Response {
    let Some(identity) = ProviderIdentity::parse(&provider) else {
        return message_json(
            StatusCode::NOT_FOUND,
            &format!("unknown provider: {provider}"),
        );
    };

    let Some(code) = query.code else {
        return message_json(
            StatusCode::BAD_REQUEST,
            &format!("{identity} sign-in: no authorization code in the callback"),
        );
    };

    match state
        .registry
        .exchange_access_token(&state.http, identity, &code)
        .await
    {
        Ok(Some(access_token)) => {
            info!(provider = %identity, "sign-in complete");
            let session = Session::new(identity, access_token);
            let jar = jar.add(session_cookie(&state, session.encode()));
            (jar, Redirect::to("/")).into_response()
        }
        Ok(None) => {
            warn!(provider = %identity, "token response carried no access token");
            message_json(
                StatusCode::UNAUTHORIZED,
                &format!("{identity} sign-in failed: the provider rejected the grant"),
            )
        }
        Err(error) => {
            warn!(provider = %identity, %error, "token exchange failed");
            message_json(
                StatusCode::BAD_GATEWAY,
                &format!("{identity} sign-in failed: could not reach the provider"),
            )
        }
    }
}

//! Session load/persist wrapper around every request.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::SET_COOKIE;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use super::{cookie, SESSION_TTL};
use crate::server::ServerState;

/// The resolved session ID for the current request, installed as a
/// request extension so handlers get an explicit handle rather than
/// re-parsing cookies.
#[derive(Debug, Clone, Copy)]
pub struct SessionId(pub Uuid);

/// Resolve-or-create the session ID before the handler runs and stamp
/// the signed cookie on the way out.
///
/// A missing, expired, or tampered cookie silently becomes a fresh
/// session. The cookie is re-set on every response, which renews the
/// one-hour idle window from the client's point of view to match the
/// store's.
pub async fn session_layer(
    State(state): State<Arc<ServerState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let id = cookie::from_headers(request.headers(), &state.session_secret)
        .unwrap_or_else(Uuid::now_v7);
    request.extensions_mut().insert(SessionId(id));

    let mut response = next.run(request).await;

    let value = cookie::set_cookie_value(id, &state.session_secret, SESSION_TTL.as_secs());
    if let Ok(header) = HeaderValue::from_str(&value) {
        response.headers_mut().insert(SET_COOKIE, header);
    }
    response
}

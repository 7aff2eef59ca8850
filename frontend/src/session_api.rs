//! Client for the `/api/session` resource. Every call is a direct
//! passthrough: one in-flight request, result delivered once to the caller.

use gloo_net::http::Method;

use crate::api::{fetch_empty, fetch_json, ApiError};
use crate::models::{RentalSession, SessionPayload};

/// Server-ordered list; never re-sorted client-side.
pub async fn all() -> Result<Vec<RentalSession>, ApiError> {
    fetch_json(Method::GET, "/api/session", None::<&()>).await
}

pub async fn detail(id: i64) -> Result<RentalSession, ApiError> {
    fetch_json(Method::GET, &format!("/api/session/{id}"), None::<&()>).await
}

/// Echoes the stored record.
pub async fn create(payload: &SessionPayload) -> Result<RentalSession, ApiError> {
    fetch_json(Method::POST, "/api/session", Some(payload)).await
}

/// Full replace; echoes the stored record.
pub async fn update(id: i64, payload: &SessionPayload) -> Result<RentalSession, ApiError> {
    fetch_json(Method::PUT, &format!("/api/session/{id}"), Some(payload)).await
}

pub async fn delete(id: i64) -> Result<(), ApiError> {
    fetch_empty(Method::DELETE, &format!("/api/session/{id}"), None::<&()>).await
}

/// Join the roster. Idempotent in intent; duplicate joins are the server's
/// concern, not guarded here.
pub async fn participate(session_id: i64, user_id: i64) -> Result<(), ApiError> {
    fetch_empty(
        Method::POST,
        &format!("/api/session/{session_id}/participate/{user_id}"),
        None::<&()>,
    )
    .await
}

/// Leave the roster.
pub async fn un_participate(session_id: i64, user_id: i64) -> Result<(), ApiError> {
    fetch_empty(
        Method::DELETE,
        &format!("/api/session/{session_id}/participate/{user_id}"),
        None::<&()>,
    )
    .await
}

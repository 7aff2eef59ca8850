//! Client for the read-only `/api/teacher` resource.

use gloo_net::http::Method;

use crate::api::{fetch_json, ApiError};
use crate::models::Teacher;

pub async fn all() -> Result<Vec<Teacher>, ApiError> {
    fetch_json(Method::GET, "/api/teacher", None::<&()>).await
}

pub async fn detail(id: i64) -> Result<Teacher, ApiError> {
    fetch_json(Method::GET, &format!("/api/teacher/{id}"), None::<&()>).await
}

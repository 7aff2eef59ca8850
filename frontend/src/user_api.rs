//! Client for the `/api/user` resource: read and self-service delete.

use gloo_net::http::Method;

use crate::api::{fetch_empty, fetch_json, ApiError};
use crate::models::User;

pub async fn detail(id: i64) -> Result<User, ApiError> {
    fetch_json(Method::GET, &format!("/api/user/{id}"), None::<&()>).await
}

pub async fn delete(id: i64) -> Result<(), ApiError> {
    fetch_empty(Method::DELETE, &format!("/api/user/{id}"), None::<&()>).await
}

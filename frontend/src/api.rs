use gloo_net::http::{Method, Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::session;

/* ---------------- error taxonomy ---------------- */

/// Failure kinds surfaced to the calling component. Auth failures must never
/// leak the server's own message to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("not found")]
    NotFound,
    #[error("network or server error: {0}")]
    NetworkOrServer(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::NetworkOrServer(e.to_string())
    }
}

/// Maps a response status to a failure kind; `None` for 2xx.
pub fn classify_status(status: u16) -> Option<ApiError> {
    match status {
        200..=299 => None,
        401 => Some(ApiError::Unauthorized),
        403 => Some(ApiError::Forbidden),
        404 => Some(ApiError::NotFound),
        s => Some(ApiError::NetworkOrServer(format!("HTTP {s}"))),
    }
}

fn check(resp: &Response) -> Result<(), ApiError> {
    match classify_status(resp.status()) {
        None => Ok(()),
        Some(e) => Err(e),
    }
}

/* ---------------- request plumbing ---------------- */

fn builder(method: Method, path: &str) -> RequestBuilder {
    let b = match method {
        Method::GET => Request::get(path),
        Method::POST => Request::post(path),
        Method::PUT => Request::put(path),
        Method::PATCH => Request::patch(path),
        Method::DELETE => Request::delete(path),
        _ => Request::get(path),
    };
    // Bearer credential of the current principal, when logged in.
    match session::bearer() {
        Some(token) => b.header("Authorization", &format!("Bearer {token}")),
        None => b,
    }
}

/// Generic JSON call. Single-shot: no retry, no caching, no timeout.
pub async fn fetch_json<T, U>(method: Method, path: &str, body: Option<&T>) -> Result<U, ApiError>
where
    T: Serialize + ?Sized,
    U: DeserializeOwned,
{
    let b = builder(method, path);
    let resp = match body {
        Some(v) => b.json(v)?.send().await?,
        None => b.send().await?,
    };
    check(&resp)?;
    Ok(resp.json().await?)
}

/// Call whose success carries no body (200 / 204).
pub async fn fetch_empty<T>(method: Method, path: &str, body: Option<&T>) -> Result<(), ApiError>
where
    T: Serialize + ?Sized,
{
    let b = builder(method, path);
    let resp = match body {
        Some(v) => b.json(v)?.send().await?,
        None => b.send().await?,
    };
    check(&resp)
}

/* ---------------- tests ---------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_are_not_errors() {
        assert_eq!(classify_status(200), None);
        assert_eq!(classify_status(204), None);
    }

    #[test]
    fn auth_statuses_map_to_their_kinds() {
        assert_eq!(classify_status(401), Some(ApiError::Unauthorized));
        assert_eq!(classify_status(403), Some(ApiError::Forbidden));
        assert_eq!(classify_status(404), Some(ApiError::NotFound));
    }

    #[test]
    fn other_failures_fold_into_the_catch_all() {
        assert!(matches!(
            classify_status(400),
            Some(ApiError::NetworkOrServer(_))
        ));
        assert!(matches!(
            classify_status(500),
            Some(ApiError::NetworkOrServer(_))
        ));
    }
}

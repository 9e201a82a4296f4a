//! HTTP client for the catalog API.
//!
//! `CatalogApi` is the seam the store talks through; `HttpCatalogApi` is the
//! browser implementation built on `gloo-net`. Every call returns a boxed
//! local future so the store can hold the API as `Rc<dyn CatalogApi>` and
//! tests can substitute an in-memory fake.

use common::model::author::Author;
use common::model::course::Course;
use common::responses::ErrorBody;
use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Path prefix of the catalog API, served by the same origin as the app.
pub const API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status. Displays only `message` so
    /// it can be shown to the user as-is.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

pub trait CatalogApi {
    fn fetch_courses(&self) -> LocalBoxFuture<'static, Result<Vec<Course>, ApiError>>;
    fn fetch_authors(&self) -> LocalBoxFuture<'static, Result<Vec<Author>, ApiError>>;
    /// Creates the course when it has no id, otherwise updates it. Resolves to
    /// the stored record, including the server-assigned id and slug.
    fn save_course(&self, course: Course) -> LocalBoxFuture<'static, Result<Course, ApiError>>;
}

pub struct HttpCatalogApi {
    base_url: String,
}

impl HttpCatalogApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for HttpCatalogApi {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

impl CatalogApi for HttpCatalogApi {
    fn fetch_courses(&self) -> LocalBoxFuture<'static, Result<Vec<Course>, ApiError>> {
        let url = format!("{}/courses", self.base_url);
        async move { get_json(&url).await }.boxed_local()
    }

    fn fetch_authors(&self) -> LocalBoxFuture<'static, Result<Vec<Author>, ApiError>> {
        let url = format!("{}/authors", self.base_url);
        async move { get_json(&url).await }.boxed_local()
    }

    fn save_course(&self, course: Course) -> LocalBoxFuture<'static, Result<Course, ApiError>> {
        let base_url = self.base_url.clone();
        async move {
            let request = match course.id {
                Some(id) => Request::put(&format!("{}/courses/{}", base_url, id)),
                None => Request::post(&format!("{}/courses", base_url)),
            }
            .json(&course)
            .map_err(|e| ApiError::Decode(e.to_string()))?;

            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(response).await
        }
        .boxed_local()
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let status_text = response.status_text();
        let body = response.json::<ErrorBody>().await.ok();
        return Err(status_error(status, body, &status_text));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Picks the most useful message for a failed response: the server's
/// `ErrorBody`, then the HTTP status text, then a generic description.
fn status_error(status: u16, body: Option<ErrorBody>, status_text: &str) -> ApiError {
    let message = match body {
        Some(body) if !body.error.trim().is_empty() => body.error,
        _ if !status_text.trim().is_empty() => status_text.to_string(),
        _ => format!("Request failed with status {}", status),
    };
    ApiError::Status { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins() {
        let err = status_error(409, Some(ErrorBody::new("Conflict")), "Conflict!!");
        assert_eq!(err.to_string(), "Conflict");
        assert!(matches!(err, ApiError::Status { status: 409, .. }));
    }

    #[test]
    fn falls_back_to_status_text_then_generic_message() {
        assert_eq!(
            status_error(503, Some(ErrorBody::new(" ")), "Service Unavailable").to_string(),
            "Service Unavailable"
        );
        assert_eq!(
            status_error(500, None, "").to_string(),
            "Request failed with status 500"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = HttpCatalogApi::new("http://localhost:8080/api/");
        assert_eq!(api.base_url, "http://localhost:8080/api");
    }
}

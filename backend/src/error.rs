//! Error type shared by the catalog handlers and the database layer.
//!
//! Every variant renders as a JSON `ErrorBody` so the frontend can show the
//! message as-is next to the form.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::responses::ErrorBody;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0}")]
    Validation(String),

    #[error("A course with slug '{slug}' already exists.")]
    Conflict { slug: String },

    #[error("Course {id} not found.")]
    NotFound { id: u32 },

    #[error("Course id {rowid} is out of range.")]
    IdOutOfRange { rowid: i64 },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::Conflict { .. } => StatusCode::CONFLICT,
            CatalogError::NotFound { .. } => StatusCode::NOT_FOUND,
            CatalogError::IdOutOfRange { .. } => StatusCode::INSUFFICIENT_STORAGE,
            CatalogError::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            CatalogError::Database(e) => {
                log::error!("catalog database failure: {e}");
                "The catalog is temporarily unavailable.".to_string()
            }
            CatalogError::IdOutOfRange { rowid } => {
                log::error!("course rowid {rowid} does not fit a course id");
                "The catalog cannot hold more courses.".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody::new(message))
    }
}

//! # Author Service Module
//!
//! Read-only access to the catalog's authors under `/api/authors`.
//!
//! *   **`GET /`**: returns every author as a JSON array ordered by id.

use actix_web::web::{get, scope, Data};
use actix_web::{HttpResponse, Scope};

use crate::db::CatalogDb;
use crate::error::CatalogResult;

const API_PATH: &str = "/api/authors";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(list))
}

async fn list(db: Data<CatalogDb>) -> CatalogResult<HttpResponse> {
    let authors = db.authors().await?;
    Ok(HttpResponse::Ok().json(authors))
}

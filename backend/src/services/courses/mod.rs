//! # Course Service Module
//!
//! Routes every course endpoint under `/api/courses` to its handler.
//!
//! *   **`GET /`** (`list::process`): all courses as a JSON array ordered by id.
//! *   **`POST /`** (`save::create`): creates a course from a JSON `Course`.
//!     The id in the payload is ignored and the slug is derived from the title.
//!     Responds `201 Created` with the stored course.
//! *   **`PUT /{id}`** (`save::update`): replaces the course with that id.
//!     Responds `200 OK` with the stored course, or `404` when it does not exist.
//!
//! Saves answer `400` when the title is missing and `409` when the slug is
//! already used by another course, always with an `ErrorBody` JSON payload.

mod list;
mod save;
mod slug;

use actix_web::web::{get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/courses";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(save::create))
        .route("/{id}", put().to(save::update))
}

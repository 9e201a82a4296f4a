//! # Course Save Service
//!
//! Handlers for `POST /api/courses` and `PUT /api/courses/{id}`.
//!
//! Both run the same pipeline in `save_course`:
//! 1. Reject a blank title (`400`, `"Title is required."`).
//! 2. Derive the slug from the title for new courses; existing courses keep
//!    the slug they were created with unless the payload left it empty.
//! 3. Upsert through `CatalogDb`, which rejects a slug owned by another
//!    course (`409`) and an unknown id on update (`404`).

use actix_web::web::{Data, Json, Path};
use actix_web::HttpResponse;
use common::model::course::Course;
use log::{info, warn};

use super::slug::slugify;
use crate::db::CatalogDb;
use crate::error::{CatalogError, CatalogResult};

pub async fn create(db: Data<CatalogDb>, payload: Json<Course>) -> CatalogResult<HttpResponse> {
    let mut course = payload.into_inner();
    course.id = None;
    course.slug.clear();

    let saved = save_course(&db, course).await?;
    info!("created course {:?} ({})", saved.id, saved.slug);
    Ok(HttpResponse::Created().json(saved))
}

pub async fn update(
    db: Data<CatalogDb>,
    id: Path<u32>,
    payload: Json<Course>,
) -> CatalogResult<HttpResponse> {
    let mut course = payload.into_inner();
    course.id = Some(id.into_inner());

    let saved = save_course(&db, course).await?;
    info!("updated course {:?} ({})", saved.id, saved.slug);
    Ok(HttpResponse::Ok().json(saved))
}

pub async fn save_course(db: &CatalogDb, mut course: Course) -> CatalogResult<Course> {
    if course.title.trim().is_empty() {
        return Err(CatalogError::Validation("Title is required.".to_string()));
    }

    if course.slug.trim().is_empty() {
        course.slug = slugify(&course.title);
    }
    if course.slug.is_empty() {
        return Err(CatalogError::Validation(
            "Title must contain at least one letter or digit.".to_string(),
        ));
    }

    db.upsert_course(course).await.inspect_err(|e| {
        if let CatalogError::Conflict { slug } = e {
            warn!("rejected save, slug {slug} is taken");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::super::configure_routes;
    use crate::db::CatalogDb;
    use actix_web::http::StatusCode;
    use actix_web::web::Data;
    use actix_web::{test, App};
    use common::model::course::Course;
    use common::responses::ErrorBody;

    fn draft(title: &str) -> Course {
        Course {
            title: title.to_string(),
            author_id: Some(2),
            category: "Software Practices".to_string(),
            ..Course::default()
        }
    }

    #[actix_web::test]
    async fn create_assigns_id_and_slug() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(CatalogDb::open_in_memory().unwrap()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/courses")
            .set_json(draft("Rust: Ownership in Practice"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let saved: Course = test::read_body_json(resp).await;
        assert_eq!(saved.id, Some(1));
        assert_eq!(saved.slug, "rust-ownership-in-practice");
        assert_eq!(saved.author_id, Some(2));

        let req = test::TestRequest::get().uri("/api/courses").to_request();
        let listed: Vec<Course> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed, vec![saved]);
    }

    #[actix_web::test]
    async fn blank_title_is_rejected_with_message() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(CatalogDb::open_in_memory().unwrap()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/courses")
            .set_json(draft("   "))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "Title is required.");
    }

    #[actix_web::test]
    async fn title_with_taken_slug_conflicts() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(CatalogDb::seeded().unwrap()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/courses")
            .set_json(draft("React Big Picture"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(
            body.error,
            "A course with slug 'react-big-picture' already exists."
        );
    }

    #[actix_web::test]
    async fn update_keeps_slug_and_uses_path_id() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(CatalogDb::seeded().unwrap()))
                .service(configure_routes()),
        )
        .await;

        let mut edited = Course {
            id: Some(999),
            slug: "react-big-picture".to_string(),
            ..draft("React: The Bigger Picture")
        };
        edited.length = "1:11".to_string();

        let req = test::TestRequest::put()
            .uri("/api/courses/2")
            .set_json(&edited)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let saved: Course = test::read_body_json(resp).await;
        assert_eq!(saved.id, Some(2));
        assert_eq!(saved.slug, "react-big-picture");
        assert_eq!(saved.title, "React: The Bigger Picture");
        assert_eq!(saved.length, "1:11");
    }

    #[actix_web::test]
    async fn update_of_missing_course_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(CatalogDb::open_in_memory().unwrap()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/courses/7")
            .set_json(draft("Nowhere"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

use actix_web::web::Data;
use actix_web::HttpResponse;

use crate::db::CatalogDb;
use crate::error::CatalogResult;

pub async fn process(db: Data<CatalogDb>) -> CatalogResult<HttpResponse> {
    let courses = db.courses().await?;
    Ok(HttpResponse::Ok().json(courses))
}

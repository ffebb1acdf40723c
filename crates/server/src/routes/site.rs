use axum::Json;
use common::types::Message;
use models::{course::Course, faculty::Faculty, testimonial::Testimonial};
use service::services::catalog_service;

pub const GREETING: &str = "Sangharsh Classes API";

#[utoipa::path(get, path = "/", tag = "site", responses((status = 200, description = "Greeting")))]
pub async fn root() -> Json<Message> {
    Json(Message::new(GREETING))
}

#[utoipa::path(get, path = "/faculty", tag = "site", responses((status = 200, description = "Faculty members")))]
pub async fn faculty() -> Json<&'static [Faculty]> {
    Json(catalog_service::faculty())
}

#[utoipa::path(get, path = "/courses", tag = "site", responses((status = 200, description = "Courses offered")))]
pub async fn courses() -> Json<&'static [Course]> {
    Json(catalog_service::courses())
}

#[utoipa::path(get, path = "/testimonials", tag = "site", responses((status = 200, description = "Student testimonials")))]
pub async fn testimonials() -> Json<&'static [Testimonial]> {
    Json(catalog_service::testimonials())
}

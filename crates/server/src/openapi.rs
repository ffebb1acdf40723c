use utoipa::openapi::server::Server;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct StatusCheckCreateDoc { pub client_name: String }

#[derive(ToSchema)]
pub struct ContactFormCreateDoc {
    pub name: String,
    pub phone: String,
    pub student_class: String,
    pub message: String,
}

#[derive(ToSchema)]
pub struct GalleryImageCreateDoc {
    pub title: String,
    pub image_url: String,
    /// Defaults to `general`.
    pub category: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Sangharsh Classes API"),
    servers((url = "/api", description = "Default API prefix; paths are relative to it")),
    paths(
        crate::routes::site::root,
        crate::routes::site::faculty,
        crate::routes::site::courses,
        crate::routes::site::testimonials,
        crate::routes::status::create,
        crate::routes::status::list,
        crate::routes::contact::submit,
        crate::routes::contact::list,
        crate::routes::gallery::list,
        crate::routes::gallery::create,
        crate::routes::gallery::delete,
        crate::routes::gallery::init,
    ),
    components(
        schemas(
            StatusCheckCreateDoc,
            ContactFormCreateDoc,
            GalleryImageCreateDoc,
        )
    ),
    tags(
        (name = "site"),
        (name = "status"),
        (name = "contact"),
        (name = "gallery")
    )
)]
pub struct ApiDoc;

/// The generated document with its server entry pointed at the mounted prefix.
pub fn document(prefix: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    let url = if prefix.is_empty() { "/" } else { prefix };
    doc.servers = Some(vec![Server::new(url)]);
    doc
}

use utoipa::OpenApi;

use crate::routes::{api, health};

#[derive(OpenApi)]
#[openapi(info(
    title = "maveli-server",
    description = "Onam festival greeting API",
    version = "0.1.0",
    contact(name = "maveli-rs", url = "https://github.com/maveli-rs/maveli.rs")
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(health::HealthApi::openapi());
    root.merge(api::api_docs());
    root
}

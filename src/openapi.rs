/// OpenAPI documentation for Post Service
use utoipa::OpenApi;

use crate::models::{CreatePostRequest, Post, UpdatePostRequest};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Post Service API",
        version = "1.0.0",
        description = "CRUD endpoints over posts. Each post carries a storage-assigned identifier plus optional title and content.",
        license(
            name = "MIT"
        )
    ),
    paths(
        crate::handlers::posts::create_post,
        crate::handlers::posts::list_posts,
        crate::handlers::posts::update_post,
        crate::handlers::posts::delete_post
    ),
    components(schemas(Post, CreatePostRequest, UpdatePostRequest)),
    tags(
        (name = "posts", description = "Post creation, retrieval, updates, and deletion")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/api-docs/openapi.json"
    }
}

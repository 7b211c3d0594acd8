/// Post handlers - HTTP endpoints for post operations
///
/// Each handler is a stateless pass-through from the route to a single
/// repository call, plus one outcome log entry per request. Failures are
/// logged by the `AppError` response conversion so that every request
/// produces exactly one entry.
use crate::db::post_repo;
use crate::error::{AppError, Result};
use crate::models::{CreatePostRequest, Post, UpdatePostRequest};
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

/// A malformed id is a storage validation failure (400), not a missing
/// route, so the path segment is parsed here rather than by the extractor.
fn parse_post_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|e| AppError::ValidationError(format!("malformed id {raw:?}: {e}")))
}

/// Create a new post
#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = Post),
        (status = 400, description = "The store rejected the supplied fields"),
        (status = 500, description = "Storage unavailable")
    )
)]
pub async fn create_post(
    pool: web::Data<PgPool>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let post = post_repo::create_post(&pool, req.title.as_deref(), req.content.as_deref()).await?;

    tracing::info!(post_id = %post.id, "post created");
    Ok(HttpResponse::Created().json(post))
}

/// List all posts
#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    responses(
        (status = 200, description = "All posts in creation order", body = [Post]),
        (status = 500, description = "Storage unavailable")
    )
)]
pub async fn list_posts(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let posts = post_repo::list_posts(&pool).await?;

    tracing::info!(count = posts.len(), "posts listed");
    Ok(HttpResponse::Ok().json(posts))
}

/// Update a post by id
#[utoipa::path(
    put,
    path = "/posts/{id}",
    tag = "posts",
    params(
        ("id" = Uuid, Path, description = "Post identifier")
    ),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated", body = Post),
        (status = 400, description = "Malformed id or fields"),
        (status = 404, description = "No post with the given id"),
        (status = 500, description = "Storage unavailable")
    )
)]
pub async fn update_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<String>,
    req: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    let post_id = parse_post_id(&post_id)?;
    let updated =
        post_repo::update_post(&pool, post_id, req.title.as_deref(), req.content.as_deref())
            .await?;

    match updated {
        Some(post) => {
            tracing::info!(post_id = %post.id, "post updated");
            Ok(HttpResponse::Ok().json(post))
        }
        None => Err(AppError::NotFound(format!("no post with id {}", post_id))),
    }
}

/// Delete a post by id
#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = "posts",
    params(
        ("id" = Uuid, Path, description = "Post identifier")
    ),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No post with the given id"),
        (status = 500, description = "Storage unavailable")
    )
)]
pub async fn delete_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = parse_post_id(&post_id)?;
    let deleted = post_repo::delete_post(&pool, post_id).await?;

    if deleted {
        tracing::info!(post_id = %post_id, "post deleted");
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound(format!("no post with id {}", post_id)))
    }
}

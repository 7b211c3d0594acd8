use crate::models::Post;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new post. The store assigns the id.
/// Returns the created post.
pub async fn create_post(
    pool: &PgPool,
    title: Option<&str>,
    content: Option<&str>,
) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (title, content)
        VALUES ($1, $2)
        RETURNING id, title, content, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(content)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Fetch all posts in creation order.
pub async fn list_posts(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, created_at, updated_at
        FROM posts
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Update a post's fields, merging: supplied fields replace the stored
/// values, omitted fields keep them.
/// Returns `None` when no post with the given id exists.
pub async fn update_post(
    pool: &PgPool,
    post_id: Uuid,
    title: Option<&str>,
    content: Option<&str>,
) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = COALESCE($2, title),
            content = COALESCE($3, content),
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, title, content, created_at, updated_at
        "#,
    )
    .bind(post_id)
    .bind(title)
    .bind(content)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Delete a post. Hard delete, the id is never reused.
/// Returns `false` when no post with the given id exists.
pub async fn delete_post(pool: &PgPool, post_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(post_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Data models for post-service
///
/// Defines the `Post` entity and the request bodies accepted by the CRUD
/// endpoints. Both title and content are optional free-form text; the
/// store enforces nothing beyond the id.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Post database entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Post {
    /// Storage-assigned identifier, immutable after creation
    pub id: Uuid,
    pub title: Option<String>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a post. Missing fields are stored as absent.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Request body for updating a post.
///
/// Merge semantics: supplied fields replace the stored values, omitted
/// fields keep them.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_tolerates_missing_fields() {
        let req: CreatePostRequest = serde_json::from_str("{}").expect("empty body");
        assert!(req.title.is_none());
        assert!(req.content.is_none());

        let req: CreatePostRequest =
            serde_json::from_str(r#"{"title":"T"}"#).expect("partial body");
        assert_eq!(req.title.as_deref(), Some("T"));
        assert!(req.content.is_none());
    }

    #[test]
    fn post_serializes_null_fields() {
        let post = Post {
            id: Uuid::new_v4(),
            title: None,
            content: Some("C".into()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&post).expect("serialize");
        assert!(json["title"].is_null());
        assert_eq!(json["content"], "C");
        assert!(json["id"].is_string());
    }
}

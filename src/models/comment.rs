use serde::Deserialize;
use serde_json::{Value, json};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'comments' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Comment {
    pub id: i64,
    pub comment_text: String,
    pub author_id: i64,
    pub post_id: i64,
}

impl Comment {
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "comment_text": self.comment_text,
            "author_id": self.author_id,
            "post_id": self.post_id,
        })
    }
}

/// DTO for creating a new comment.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewComment {
    #[validate(length(max = 500, message = "Comment must be at most 500 characters"))]
    pub comment_text: String,
    pub author_id: i64,
    pub post_id: i64,
}

/// DTO for editing a comment's text.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateComment {
    #[validate(length(max = 500, message = "Comment must be at most 500 characters"))]
    pub comment_text: String,
}

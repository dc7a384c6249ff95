// src/models/media.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use sqlx::FromRow;
use validator::Validate;

use crate::error::{AppError, ConstraintKind};

/// Kind of attachment. Stored as lowercase text, guarded by a CHECK constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(MediaType::Image),
            "video" => Ok(MediaType::Video),
            other => Err(AppError::constraint(
                ConstraintKind::Check,
                format!("media type must be 'image' or 'video', got '{}'", other),
            )),
        }
    }
}

/// Represents the 'media' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Media {
    pub id: i64,

    /// Mapped from the database column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    pub media_type: MediaType,

    pub url: String,
    pub post_id: i64,
}

impl Media {
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "type": self.media_type,
            "url": self.url,
            "post_id": self.post_id,
        })
    }
}

/// DTO for attaching media to a post.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewMedia {
    #[serde(rename = "type")]
    pub media_type: MediaType,
    #[validate(length(max = 300, message = "URL must be at most 300 characters"))]
    pub url: String,
    pub post_id: i64,
}

/// DTO for updating media. Fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMedia {
    #[serde(rename = "type")]
    pub media_type: Option<MediaType>,
    #[validate(length(max = 300))]
    pub url: Option<String>,
}

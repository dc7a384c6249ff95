// src/models/user.rs

use serde::Deserialize;
use serde_json::{Value, json};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'user' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,

    /// Unique handle.
    pub username: String,

    pub firstname: String,
    pub lastname: String,

    /// Unique contact address.
    pub email: String,
}

impl User {
    /// Public projection: `id` and `email` only.
    /// Names and any credential material never leave through here.
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "email": self.email,
        })
    }
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(max = 50, message = "Username must be at most 50 characters"))]
    pub username: String,
    #[validate(length(max = 50, message = "Firstname must be at most 50 characters"))]
    pub firstname: String,
    #[validate(length(max = 50, message = "Lastname must be at most 50 characters"))]
    pub lastname: String,
    #[validate(length(max = 120, message = "Email must be at most 120 characters"))]
    pub email: String,
}

/// DTO for updating a user. Fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(length(max = 50))]
    pub username: Option<String>,
    #[validate(length(max = 50))]
    pub firstname: Option<String>,
    #[validate(length(max = 50))]
    pub lastname: Option<String>,
    #[validate(length(max = 120))]
    pub email: Option<String>,
}

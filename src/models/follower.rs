// src/models/follower.rs

use serde::Deserialize;
use serde_json::{Value, json};
use sqlx::FromRow;

/// Represents the 'follower' table: one directed edge,
/// `user_from_id` follows `user_to_id`.
/// The pair is the primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRow)]
pub struct Follower {
    pub user_from_id: i64,
    pub user_to_id: i64,
}

impl Follower {
    pub fn serialize(&self) -> Value {
        json!({
            "user_from_id": self.user_from_id,
            "user_to_id": self.user_to_id,
        })
    }
}

/// DTO for creating a follow edge.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NewFollower {
    pub user_from_id: i64,
    pub user_to_id: i64,
}

/// Edge counts for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FollowCounts {
    pub following: i64,
    pub followers: i64,
}

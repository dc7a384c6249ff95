// src/models/mod.rs

pub mod comment;
pub mod follower;
pub mod media;
pub mod post;
pub mod user;

pub use comment::Comment;
pub use follower::Follower;
pub use media::{Media, MediaType};
pub use post::Post;
pub use user::User;

// src/lib.rs

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repo;

pub use error::{AppError, ConstraintKind};

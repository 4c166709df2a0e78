//! # Reviews Common Library
//!
//! Shared code for the review manager:
//! - Review models and rating validation
//! - SQLite schema, bootstrap and data access
//! - Database location resolution

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use error::{Error, Result};
pub use models::{NewReview, Outcome, Rating, Review};

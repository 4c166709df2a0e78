//! HTTP handlers for reviews-web

pub mod health;
pub mod reset;
pub mod reviews;

pub use health::health_routes;
pub use reset::reset_db;
pub use reviews::{
    create_form, delete_review, edit_form, list_reviews, show_review, submit_create, submit_edit,
};

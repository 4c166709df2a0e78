//! Database schema, bootstrap and review queries

pub mod init;
pub mod reviews;

pub use init::*;

//! `db` crate — the job listing data-access layer.
//!
//! Provides the MongoDB connection handle, typed job listing models, and the
//! [`JobRepository`] with its five CRUD operations. Callers (the API layer)
//! hand in already-validated input and map each [`DbError`] to a response.

pub mod config;
pub mod error;
pub mod mock;
pub mod models;
pub mod pool;
pub mod repository;

pub use config::DbConfig;
pub use error::DbError;
pub use pool::DbPool;
pub use repository::{JobRepository, MongoJobRepository};

#[cfg(test)]
mod repository_tests;

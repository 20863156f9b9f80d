//! Libra Catalog
//!
//! Book catalog service for a library's inventory: list, add, edit and remove
//! books, and resolve author and genre names to their identifiers. Exposed as
//! a REST JSON API over a PostgreSQL database.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

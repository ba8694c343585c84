//! Travel discovery server
//!
//! A REST JSON API for browsing places, agencies and tour schedules, with
//! admin-curated content and user likes and comments.

use std::sync::Arc;

use sqlx::PgPool;

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
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Wire the repository and services around a database pool
    pub fn new(config: AppConfig, pool: PgPool) -> Self {
        let repository = repository::Repository::new(pool);
        let services = services::Services::new(repository, &config.uploads);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}

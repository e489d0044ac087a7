//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;
use migration::{Migrator, MigratorTrait};

use byline_core::{AuthorService, PostService};
use byline_infra::database::connect;
use byline_infra::{
    InMemoryAuthorRepository, InMemoryPostRepository, SeaOrmAuthorRepository,
    SeaOrmPostRepository,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub authors: AuthorService,
    pub posts: PostService,
}

impl AppState {
    /// State backed by in-memory repositories.
    pub fn in_memory() -> Self {
        Self {
            authors: AuthorService::new(Arc::new(InMemoryAuthorRepository::new())),
            posts: PostService::new(Arc::new(InMemoryPostRepository::new())),
        }
    }

    /// Build the application state with appropriate implementations.
    ///
    /// A configured database that cannot be reached is a startup error; the
    /// in-memory store is only used when no database is configured at all.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let Some(db_config) = &config.database else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Ok(Self::in_memory());
        };

        let db = connect(db_config)
            .await
            .context("failed to connect to database")?;

        if config.auto_migrate {
            Migrator::up(&db, None)
                .await
                .context("failed to run migrations")?;
            tracing::info!("Migrations applied");
        }

        tracing::info!("Application state initialized");

        Ok(Self {
            authors: AuthorService::new(Arc::new(SeaOrmAuthorRepository::new(db.clone()))),
            posts: PostService::new(Arc::new(SeaOrmPostRepository::new(db))),
        })
    }
}

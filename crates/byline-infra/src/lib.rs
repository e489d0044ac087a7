//! # Byline Infrastructure
//!
//! Concrete implementations of the repository ports defined in `byline-core`.
//!
//! ## Feature Flags
//!
//! - `database` (default) - SeaORM repositories for PostgreSQL and SQLite
//!
//! The in-memory repositories are always available.

pub mod memory;

#[cfg(feature = "database")]
pub mod database;

// Re-exports - In-Memory
pub use memory::{InMemoryAuthorRepository, InMemoryPostRepository};

// Re-exports - SeaORM
#[cfg(feature = "database")]
pub use database::{DatabaseConfig, SeaOrmAuthorRepository, SeaOrmPostRepository};

//! SeaORM persistence for authors and posts.

mod base;
mod connections;
pub mod entity;
mod repo;

pub use base::SeaOrmBaseRepository;
pub use connections::{DatabaseConfig, connect};
pub use repo::{SeaOrmAuthorRepository, SeaOrmPostRepository};

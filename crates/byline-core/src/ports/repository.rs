use async_trait::async_trait;

use crate::domain::{Author, AuthorChanges, NewAuthor, NewPost, Post, PostChanges};
use crate::error::RepoError;

/// Generic repository trait defining the operations shared by every entity.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// List all entities ordered by ID.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Author repository.
///
/// Implementations must reject a second author with the same name using
/// `RepoError::Constraint`, independently of any check done before the write.
#[async_trait]
pub trait AuthorRepository: BaseRepository<Author, i32> {
    /// Find an author by exact (case-sensitive) name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError>;

    /// Store a new author. Sets `id` and `created_at`.
    async fn insert(&self, author: NewAuthor) -> Result<Author, RepoError>;

    /// Apply changes to a stored author. Sets `updated_at`.
    async fn update(&self, id: i32, changes: AuthorChanges) -> Result<Author, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// Store a new post. Sets `id` and `created_at`.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Apply changes to a stored post. Sets `updated_at`.
    async fn update(&self, id: i32, changes: PostChanges) -> Result<Post, RepoError>;
}

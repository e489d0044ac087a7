use std::sync::Arc;

use crate::domain::{NewPost, Post, PostChanges};
use crate::error::DomainError;
use crate::ports::PostRepository;

use super::not_found;

const ENTITY: &str = "Post";

/// Post use cases.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Validate and store a new post.
    pub async fn create(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
        summary: impl Into<String>,
        category: &str,
    ) -> Result<Post, DomainError> {
        let new_post = NewPost::new(title, content, summary, category)?;

        let post = self.repo.insert(new_post).await?;
        tracing::info!(post_id = post.id, category = %post.category, "Post created");
        Ok(post)
    }

    pub async fn get(&self, id: i32) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: ENTITY,
                id,
            })
    }

    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.find_all().await?)
    }

    /// Store already-validated changes to an existing post.
    pub async fn update(&self, id: i32, changes: PostChanges) -> Result<Post, DomainError> {
        let post = self
            .repo
            .update(id, changes)
            .await
            .map_err(not_found(ENTITY, id))?;
        tracing::info!(post_id = id, "Post updated");
        Ok(post)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        self.repo.delete(id).await.map_err(not_found(ENTITY, id))?;
        tracing::info!(post_id = id, "Post deleted");
        Ok(())
    }
}

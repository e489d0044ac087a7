use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use byline_core::domain::{NewPost, Post, PostChanges};
use byline_core::error::RepoError;
use byline_core::ports::{BaseRepository, PostRepository};

use super::Table;

#[derive(Default)]
pub struct InMemoryPostRepository {
    table: RwLock<Table<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        let (title, content, summary, category) = post.into_parts();
        let post = Post {
            id: table.allocate_id(),
            title,
            content,
            summary,
            category,
            created_at: Utc::now(),
            updated_at: None,
        };
        table.rows.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, id: i32, changes: PostChanges) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        let post = table.rows.get_mut(&id).ok_or(RepoError::NotFound)?;
        changes.apply(post);
        post.updated_at = Some(Utc::now());
        Ok(post.clone())
    }
}

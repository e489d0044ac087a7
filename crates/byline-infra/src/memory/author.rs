use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use byline_core::domain::{Author, AuthorChanges, NewAuthor};
use byline_core::error::RepoError;
use byline_core::ports::{AuthorRepository, BaseRepository};

use super::Table;

/// Author store backed by a `BTreeMap` behind an async `RwLock`.
#[derive(Default)]
pub struct InMemoryAuthorRepository {
    table: RwLock<Table<Author>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn name_conflict(name: &str) -> RepoError {
    RepoError::Constraint(format!("authors.name '{}' already exists", name))
}

#[async_trait]
impl BaseRepository<Author, i32> for InMemoryAuthorRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Author>, RepoError> {
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
impl AuthorRepository for InMemoryAuthorRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|a| a.name == name).cloned())
    }

    async fn insert(&self, author: NewAuthor) -> Result<Author, RepoError> {
        let mut table = self.table.write().await;
        if table.rows.values().any(|a| a.name == author.name()) {
            return Err(name_conflict(author.name()));
        }

        let (name, phone_number) = author.into_parts();
        let author = Author {
            id: table.allocate_id(),
            name,
            phone_number,
            created_at: Utc::now(),
            updated_at: None,
        };
        table.rows.insert(author.id, author.clone());
        Ok(author)
    }

    async fn update(&self, id: i32, changes: AuthorChanges) -> Result<Author, RepoError> {
        let mut table = self.table.write().await;
        if let Some(name) = changes.name() {
            if table.rows.values().any(|a| a.name == name && a.id != id) {
                return Err(name_conflict(name));
            }
        }

        let author = table.rows.get_mut(&id).ok_or(RepoError::NotFound)?;
        changes.apply(author);
        author.updated_at = Some(Utc::now());
        Ok(author.clone())
    }
}

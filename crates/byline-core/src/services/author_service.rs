use std::sync::Arc;

use crate::domain::author::{self, Author, AuthorChanges, NewAuthor};
use crate::error::{DomainError, ValidationError};
use crate::ports::AuthorRepository;

use super::not_found;

const ENTITY: &str = "Author";

/// Author use cases. The repository handle is the persistence context used
/// both for storage and for the name uniqueness check.
#[derive(Clone)]
pub struct AuthorService {
    repo: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    pub fn new(repo: Arc<dyn AuthorRepository>) -> Self {
        Self { repo }
    }

    /// Full name validator: non-empty after trimming and not already used by
    /// any stored author, including the one being updated.
    ///
    /// The lookup and the later write are not atomic. Two concurrent creates
    /// with the same name can both pass here; the repository's unique
    /// constraint then fails the second write with `DomainError::Duplicate`.
    pub async fn validate_name(
        &self,
        value: impl Into<String>,
    ) -> Result<String, DomainError> {
        let value = author::validate_name(value.into())?;

        if let Some(existing) = self.repo.find_by_name(&value).await? {
            tracing::debug!(author_id = existing.id, "Author name already taken");
            return Err(ValidationError::new(
                "name",
                format!("Author name '{}' must be unique.", value),
            )
            .into());
        }

        Ok(value)
    }

    /// Validate and store a new author.
    pub async fn create(
        &self,
        name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Author, DomainError> {
        let name = self.validate_name(name).await?;
        let new_author = NewAuthor::new(name, phone_number)?;

        let author = self.repo.insert(new_author).await?;
        tracing::info!(author_id = author.id, "Author created");
        Ok(author)
    }

    pub async fn get(&self, id: i32) -> Result<Author, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: ENTITY,
                id,
            })
    }

    pub async fn list(&self) -> Result<Vec<Author>, DomainError> {
        Ok(self.repo.find_all().await?)
    }

    /// Re-validate and store the supplied fields of an existing author.
    pub async fn update(
        &self,
        id: i32,
        name: Option<String>,
        phone_number: Option<String>,
    ) -> Result<Author, DomainError> {
        // A missing author is reported before any field error.
        self.get(id).await?;

        let name = match name {
            Some(name) => Some(self.validate_name(name).await?),
            None => None,
        };
        let changes = AuthorChanges::new(name, phone_number)?;

        let author = self
            .repo
            .update(id, changes)
            .await
            .map_err(not_found(ENTITY, id))?;
        tracing::info!(author_id = id, "Author updated");
        Ok(author)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        self.repo.delete(id).await.map_err(not_found(ENTITY, id))?;
        tracing::info!(author_id = id, "Author deleted");
        Ok(())
    }
}

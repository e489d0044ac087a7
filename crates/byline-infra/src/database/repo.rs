//! SeaORM repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, Set};

use byline_core::domain::{Author, AuthorChanges, NewAuthor, NewPost, Post, PostChanges};
use byline_core::error::RepoError;
use byline_core::ports::{AuthorRepository, PostRepository};

use super::base::{SeaOrmBaseRepository, map_db_err};
use super::entity::author::{self, Entity as AuthorEntity};
use super::entity::post::{self, Entity as PostEntity};

/// SeaORM author repository.
pub type SeaOrmAuthorRepository = SeaOrmBaseRepository<AuthorEntity>;

/// SeaORM post repository.
pub type SeaOrmPostRepository = SeaOrmBaseRepository<PostEntity>;

#[async_trait]
impl AuthorRepository for SeaOrmAuthorRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError> {
        tracing::debug!(author_name = %name, "Finding author by name");

        AuthorEntity::find()
            .filter(author::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .map(Author::try_from)
            .transpose()
    }

    async fn insert(&self, author: NewAuthor) -> Result<Author, RepoError> {
        let active: author::ActiveModel = author.into();
        let model = active.insert(&self.db).await.map_err(map_db_err)?;
        Author::try_from(model)
    }

    async fn update(&self, id: i32, changes: AuthorChanges) -> Result<Author, RepoError> {
        let model = AuthorEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        let mut active = model.into_active_model();
        if let Some(name) = changes.name() {
            active.name = Set(name.to_owned());
        }
        if let Some(phone_number) = changes.phone_number() {
            active.phone_number = Set(phone_number.to_owned());
        }

        let model = active.update(&self.db).await.map_err(map_db_err)?;
        Author::try_from(model)
    }
}

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let active: post::ActiveModel = post.into();
        let model = active.insert(&self.db).await.map_err(map_db_err)?;
        Post::try_from(model)
    }

    async fn update(&self, id: i32, changes: PostChanges) -> Result<Post, RepoError> {
        let model = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        let mut active = model.into_active_model();
        if let Some(title) = changes.title() {
            active.title = Set(title.to_owned());
        }
        if let Some(content) = changes.content() {
            active.content = Set(content.to_owned());
        }
        if let Some(summary) = changes.summary() {
            active.summary = Set(summary.to_owned());
        }
        if let Some(category) = changes.category() {
            active.category = Set(category.as_str().to_owned());
        }

        let model = active.update(&self.db).await.map_err(map_db_err)?;
        Post::try_from(model)
    }
}

//! Post entity for SeaORM.

use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};

use byline_core::domain::Category;
use byline_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub category: String,
    pub summary: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        super::stamp(&mut self.created_at, &mut self.updated_at, insert);
        Ok(self)
    }
}

/// Conversion from SeaORM Model to Domain Post.
///
/// Fails if a row holds a category written outside this application.
impl TryFrom<Model> for byline_core::domain::Post {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let category: Category = model.category.parse().map_err(|_| {
            RepoError::Query(format!(
                "post {} has unknown category '{}'",
                model.id, model.category
            ))
        })?;

        Ok(Self {
            id: model.id,
            title: model.title,
            content: model.content,
            summary: model.summary,
            category,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.map(Into::into),
        })
    }
}

/// Conversion from a validated draft to an insertable ActiveModel.
impl From<byline_core::domain::NewPost> for ActiveModel {
    fn from(post: byline_core::domain::NewPost) -> Self {
        let (title, content, summary, category) = post.into_parts();
        Self {
            title: Set(title),
            content: Set(content),
            summary: Set(summary),
            category: Set(category.as_str().to_owned()),
            ..Default::default()
        }
    }
}

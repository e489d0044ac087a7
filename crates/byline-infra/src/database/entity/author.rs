//! Author entity for SeaORM.

use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};

use byline_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(10))")]
    pub phone_number: String,
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

/// Conversion from SeaORM Model to Domain Author.
impl TryFrom<Model> for byline_core::domain::Author {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            name: model.name,
            phone_number: model.phone_number,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.map(Into::into),
        })
    }
}

/// Conversion from a validated draft to an insertable ActiveModel.
impl From<byline_core::domain::NewAuthor> for ActiveModel {
    fn from(author: byline_core::domain::NewAuthor) -> Self {
        let (name, phone_number) = author.into_parts();
        Self {
            name: Set(name),
            phone_number: Set(phone_number),
            ..Default::default()
        }
    }
}

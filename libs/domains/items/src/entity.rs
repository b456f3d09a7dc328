use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Sea-ORM entity for the items table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Item
impl From<Model> for crate::models::Item {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
        }
    }
}

// Conversion from domain CreateItem to Sea-ORM ActiveModel; the id
// stays unset so the database assigns it.
impl From<crate::models::CreateItem> for ActiveModel {
    fn from(input: crate::models::CreateItem) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            price: Set(input.price),
        }
    }
}

// Conversion from a domain Item for full-row write-back
impl From<&crate::models::Item> for ActiveModel {
    fn from(item: &crate::models::Item) -> Self {
        ActiveModel {
            id: Set(item.id),
            name: Set(item.name.clone()),
            description: Set(item.description.clone()),
            price: Set(item.price),
        }
    }
}

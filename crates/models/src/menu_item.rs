use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// One row of the canteen menu. `id` is assigned by the database on insert
/// and immutable afterwards.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "canteen_menu")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub item_name: String,
    pub category: String,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    item_name: &str,
    category: &str,
    price: f64,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        item_name: Set(item_name.to_string()),
        category: Set(category.to_string()),
        price: Set(price),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

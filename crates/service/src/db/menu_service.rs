use models::menu_item::{self, Column, Entity as MenuItemEntity};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;

use crate::errors::ServiceError;

/// Create request body. `None` means the key was absent from the JSON.
#[derive(Debug, Deserialize)]
pub struct NewMenuItem {
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl NewMenuItem {
    /// Required-field check, performed before any database access.
    ///
    /// Deliberately asymmetric, matching the original behavior: the two
    /// strings are rejected when absent or empty, while `price` is rejected
    /// only when absent, so zero and negative prices pass.
    pub fn validate(&self) -> Result<(&str, &str, f64), ServiceError> {
        match (self.item_name.as_deref(), self.category.as_deref(), self.price) {
            (Some(name), Some(category), Some(price))
                if !name.is_empty() && !category.is_empty() =>
            {
                Ok((name, category, price))
            }
            _ => Err(ServiceError::Validation(
                "Missing item_name/category/price".into(),
            )),
        }
    }
}

/// Partial-update request body; any subset of the three fields.
#[derive(Debug, Default, Deserialize)]
pub struct MenuItemPatch {
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl MenuItemPatch {
    pub fn is_empty(&self) -> bool {
        self.item_name.is_none() && self.category.is_none() && self.price.is_none()
    }
}

/// List every menu item, ascending by id.
pub async fn list_menu_items(
    db: &DatabaseConnection,
) -> Result<Vec<menu_item::Model>, ServiceError> {
    MenuItemEntity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Insert a new menu item after validation; returns the assigned id.
pub async fn create_menu_item(
    db: &DatabaseConnection,
    input: &NewMenuItem,
) -> Result<i64, ServiceError> {
    let (item_name, category, price) = input.validate()?;
    let created = menu_item::create(db, item_name, category, price).await?;
    Ok(created.id)
}

/// Apply the supplied fields to the row matching `id` in one statement.
/// Absent fields keep their prior value.
pub async fn update_menu_item(
    db: &DatabaseConnection,
    id: i64,
    patch: &MenuItemPatch,
) -> Result<(), ServiceError> {
    if patch.is_empty() {
        return Err(ServiceError::Validation("No fields provided to update".into()));
    }
    let mut am = menu_item::ActiveModel::default();
    if let Some(name) = &patch.item_name {
        am.item_name = Set(name.clone());
    }
    if let Some(category) = &patch.category {
        am.category = Set(category.clone());
    }
    if let Some(price) = patch.price {
        am.price = Set(price);
    }
    let res = MenuItemEntity::update_many()
        .set(am)
        .filter(Column::Id.eq(id))
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Item"));
    }
    Ok(())
}

/// Remove the row matching `id`.
pub async fn delete_menu_item(db: &DatabaseConnection, id: i64) -> Result<(), ServiceError> {
    let res = MenuItemEntity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Item"));
    }
    Ok(())
}

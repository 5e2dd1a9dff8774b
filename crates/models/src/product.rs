use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Ordered ingredient list, stored as a JSON array of strings.
    pub ingredients: Json,
    /// Category tags, stored as a JSON array of strings.
    pub product_types: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a product, or replace every stored field when the id already exists.
pub async fn save(
    db: &DatabaseConnection,
    id: &str,
    name: &str,
    price: f64,
    ingredients: &[String],
    product_types: &[String],
) -> Result<Model, errors::ModelError> {
    if id.trim().is_empty() { return Err(errors::ModelError::Validation("product id required".into())); }
    let now = Utc::now().into();
    if let Some(existing) = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))? {
        let mut am: ActiveModel = existing.into();
        am.name = Set(name.to_string());
        am.price = Set(price);
        am.ingredients = Set(serde_json::json!(ingredients));
        am.product_types = Set(serde_json::json!(product_types));
        am.updated_at = Set(now);
        am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
    } else {
        let am = ActiveModel {
            id: Set(id.to_string()),
            name: Set(name.to_string()),
            price: Set(price),
            ingredients: Set(serde_json::json!(ingredients)),
            product_types: Set(serde_json::json!(product_types)),
            created_at: Set(now),
            updated_at: Set(now),
        };
        am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
    }
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find().all(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn exists(db: &DatabaseConnection, id: &str) -> Result<bool, errors::ModelError> {
    let found = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(found.is_some())
}

pub async fn hard_delete(db: &DatabaseConnection, id: &str) -> Result<(), errors::ModelError> {
    Entity::delete_by_id(id).exec(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}

pub async fn delete_all(db: &DatabaseConnection) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_many().exec(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}

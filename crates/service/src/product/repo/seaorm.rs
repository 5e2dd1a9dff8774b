use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use models::product;

use crate::errors::ServiceError;

use super::super::mapper;
use super::super::repository::ProductRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<product::Model>, ServiceError> {
        product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<product::Model>, ServiceError> {
        Ok(product::find_all(&self.db).await?)
    }

    async fn save(&self, model: product::Model) -> Result<product::Model, ServiceError> {
        let ingredients = mapper::string_list(&model.ingredients);
        let product_types = mapper::string_list(&model.product_types);
        Ok(product::save(
            &self.db,
            &model.id,
            &model.name,
            model.price,
            &ingredients,
            &product_types,
        )
        .await?)
    }

    async fn exists(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(product::exists(&self.db, id).await?)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError> {
        product::hard_delete(&self.db, id).await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, ServiceError> {
        Ok(product::delete_all(&self.db).await?)
    }
}

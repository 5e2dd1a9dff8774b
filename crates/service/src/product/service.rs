use std::sync::Arc;

use tracing::{info, instrument};

use crate::errors::ServiceError;

use super::domain::ProductDto;
use super::mapper;
use super::repository::ProductRepository;

/// Product business service. Missing rows are raised as
/// `ServiceError::NotFound`; callers translate them at their own boundary.
pub struct ProductService<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Persist a new product.
    ///
    /// # Examples
    /// ```
    /// use service::product::{service::ProductService, repository::mock::MockProductRepository};
    /// use service::product::domain::ProductDto;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockProductRepository::default());
    /// let svc = ProductService::new(repo);
    /// let dto = ProductDto {
    ///     id: Some("sku-1".into()),
    ///     name: "Bread".into(),
    ///     price: 3.5,
    ///     ingredients: vec!["flour".into()],
    ///     product_types: vec!["bakery".into()],
    /// };
    /// let created = tokio_test::block_on(svc.create_product(dto)).unwrap();
    /// assert_eq!(created.id.as_deref(), Some("sku-1"));
    /// ```
    #[instrument(skip(self, dto), fields(name = %dto.name))]
    pub async fn create_product(&self, dto: ProductDto) -> Result<ProductDto, ServiceError> {
        let model = mapper::to_model(&dto);
        let saved = self.repo.save(model).await?;
        info!(product_id = %saved.id, "product_created");
        Ok(mapper::to_dto(&saved))
    }

    pub async fn get_all_products(&self) -> Result<Vec<ProductDto>, ServiceError> {
        let products = self.repo.find_all().await?;
        Ok(products.iter().map(mapper::to_dto).collect())
    }

    pub async fn get_single_product(&self, id: &str) -> Result<ProductDto, ServiceError> {
        match self.repo.find_by_id(id).await? {
            Some(found) => Ok(mapper::to_dto(&found)),
            None => Err(ServiceError::not_found("product")),
        }
    }

    /// Overwrite every stored field with the input's values.
    #[instrument(skip(self, dto), fields(product_id = %id))]
    pub async fn update_product(&self, id: &str, dto: ProductDto) -> Result<ProductDto, ServiceError> {
        let Some(mut existing) = self.repo.find_by_id(id).await? else {
            return Err(ServiceError::not_found("product"));
        };
        existing.name = dto.name;
        existing.price = dto.price;
        existing.ingredients = serde_json::json!(dto.ingredients);
        existing.product_types = serde_json::json!(dto.product_types);
        let saved = self.repo.save(existing).await?;
        info!(product_id = %saved.id, "product_updated");
        Ok(mapper::to_dto(&saved))
    }

    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: &str) -> Result<(), ServiceError> {
        if !self.repo.exists(id).await? {
            return Err(ServiceError::not_found("product"));
        }
        self.repo.delete_by_id(id).await?;
        info!(product_id = %id, "product_deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_all_products(&self) -> Result<(), ServiceError> {
        let removed = self.repo.delete_all().await?;
        info!(removed, "all_products_deleted");
        Ok(())
    }
}

use async_trait::async_trait;
use models::product;

use crate::errors::ServiceError;

/// Repository abstraction for product persistence.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<product::Model>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<product::Model>, ServiceError>;
    /// Insert, or replace every stored field when the id already exists.
    async fn save(&self, model: product::Model) -> Result<product::Model, ServiceError>;
    async fn exists(&self, id: &str) -> Result<bool, ServiceError>;
    async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError>;
    async fn delete_all(&self) -> Result<u64, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockProductRepository {
        rows: Mutex<HashMap<String, product::Model>>,
    }

    #[async_trait]
    impl ProductRepository for MockProductRepository {
        async fn find_by_id(&self, id: &str) -> Result<Option<product::Model>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.get(id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<product::Model>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            let mut all: Vec<_> = rows.values().cloned().collect();
            all.sort_by(|a, b| a.id.cmp(&b.id));
            Ok(all)
        }

        async fn save(&self, model: product::Model) -> Result<product::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            rows.insert(model.id.clone(), model.clone());
            Ok(model)
        }

        async fn exists(&self, id: &str) -> Result<bool, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.contains_key(id))
        }

        async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            rows.remove(id);
            Ok(())
        }

        async fn delete_all(&self) -> Result<u64, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let count = rows.len() as u64;
            rows.clear();
            Ok(count)
        }
    }
}

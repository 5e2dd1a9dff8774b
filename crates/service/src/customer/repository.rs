use async_trait::async_trait;
use common::pagination::Pagination;
use models::{customer, user_details};
use uuid::Uuid;

use crate::errors::ServiceError;

/// A customer row together with its owned details row.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    pub customer: customer::Model,
    pub details: Option<user_details::Model>,
}

/// Repository abstraction for customer persistence.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CustomerRecord>, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<CustomerRecord>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<CustomerRecord>, ServiceError>;
    async fn find_page(&self, page: Pagination) -> Result<Vec<CustomerRecord>, ServiceError>;
    async fn find_by_deleted_status(&self, is_deleted: bool) -> Result<Vec<CustomerRecord>, ServiceError>;
    async fn find_by_verified_status(&self, is_verified: bool) -> Result<Vec<CustomerRecord>, ServiceError>;

    /// Persist a new record; the owned details row is stored through its own call.
    async fn insert(&self, record: CustomerRecord) -> Result<CustomerRecord, ServiceError>;
    /// Persist the full state of an existing record, upserting the details row.
    async fn update(&self, record: CustomerRecord) -> Result<CustomerRecord, ServiceError>;

    async fn exists(&self, id: Uuid) -> Result<bool, ServiceError>;
    async fn delete_by_id(&self, id: Uuid) -> Result<(), ServiceError>;
    async fn delete_all(&self) -> Result<u64, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockCustomerRepository {
        rows: Mutex<HashMap<Uuid, CustomerRecord>>,
    }

    #[async_trait]
    impl CustomerRepository for MockCustomerRepository {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<CustomerRecord>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.get(&id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<CustomerRecord>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.values().find(|r| r.customer.email == email).cloned())
        }

        async fn find_all(&self) -> Result<Vec<CustomerRecord>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            let mut all: Vec<_> = rows.values().cloned().collect();
            all.sort_by(|a, b| a.customer.email.cmp(&b.customer.email));
            Ok(all)
        }

        async fn find_page(&self, page: Pagination) -> Result<Vec<CustomerRecord>, ServiceError> {
            let (_, per_page) = page.normalize();
            let all = self.find_all().await?;
            Ok(all
                .into_iter()
                .skip(page.offset() as usize)
                .take(per_page as usize)
                .collect())
        }

        async fn find_by_deleted_status(&self, is_deleted: bool) -> Result<Vec<CustomerRecord>, ServiceError> {
            let all = self.find_all().await?;
            Ok(all.into_iter().filter(|r| r.customer.is_deleted == is_deleted).collect())
        }

        async fn find_by_verified_status(&self, is_verified: bool) -> Result<Vec<CustomerRecord>, ServiceError> {
            let all = self.find_all().await?;
            Ok(all.into_iter().filter(|r| r.customer.is_verified == is_verified).collect())
        }

        async fn insert(&self, record: CustomerRecord) -> Result<CustomerRecord, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.values().any(|r| r.customer.email == record.customer.email) {
                return Err(ServiceError::Db("unique violation: customer.email".into()));
            }
            rows.insert(record.customer.id, record.clone());
            Ok(record)
        }

        async fn update(&self, record: CustomerRecord) -> Result<CustomerRecord, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            if !rows.contains_key(&record.customer.id) {
                return Err(ServiceError::not_found("customer"));
            }
            rows.insert(record.customer.id, record.clone());
            Ok(record)
        }

        async fn exists(&self, id: Uuid) -> Result<bool, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.contains_key(&id))
        }

        async fn delete_by_id(&self, id: Uuid) -> Result<(), ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            rows.remove(&id);
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

use async_trait::async_trait;
use common::pagination::Pagination;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set};
use uuid::Uuid;

use models::{customer, user_details};

use crate::errors::ServiceError;

use super::super::repository::{CustomerRecord, CustomerRepository};

/// SeaORM-backed repository implementation.
pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    async fn with_details(&self, customer: customer::Model) -> Result<CustomerRecord, ServiceError> {
        let details = user_details::find_by_customer(&self.db, customer.id).await?;
        Ok(CustomerRecord { customer, details })
    }

    async fn load_many(&self, customers: Vec<customer::Model>) -> Result<Vec<CustomerRecord>, ServiceError> {
        let mut records = Vec::with_capacity(customers.len());
        for customer in customers {
            records.push(self.with_details(customer).await?);
        }
        Ok(records)
    }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CustomerRecord>, ServiceError> {
        let found = customer::Entity::find_by_id(id)
            .find_also_related(user_details::Entity)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found.map(|(customer, details)| CustomerRecord { customer, details }))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<CustomerRecord>, ServiceError> {
        match customer::find_by_email(&self.db, email).await? {
            Some(found) => Ok(Some(self.with_details(found).await?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<CustomerRecord>, ServiceError> {
        let rows = customer::Entity::find()
            .find_also_related(user_details::Entity)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows
            .into_iter()
            .map(|(customer, details)| CustomerRecord { customer, details })
            .collect())
    }

    async fn find_page(&self, page: Pagination) -> Result<Vec<CustomerRecord>, ServiceError> {
        let (page_idx, per_page) = page.normalize();
        let customers = customer::Entity::find()
            .order_by_asc(customer::Column::Email)
            .paginate(&self.db, per_page)
            .fetch_page(page_idx)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        self.load_many(customers).await
    }

    async fn find_by_deleted_status(&self, is_deleted: bool) -> Result<Vec<CustomerRecord>, ServiceError> {
        let customers = customer::find_by_deleted_status(&self.db, is_deleted).await?;
        self.load_many(customers).await
    }

    async fn find_by_verified_status(&self, is_verified: bool) -> Result<Vec<CustomerRecord>, ServiceError> {
        let customers = customer::find_by_verified_status(&self.db, is_verified).await?;
        self.load_many(customers).await
    }

    async fn insert(&self, record: CustomerRecord) -> Result<CustomerRecord, ServiceError> {
        let c = &record.customer;
        let am = customer::ActiveModel {
            id: Set(c.id),
            email: Set(c.email.clone()),
            password: Set(c.password.clone()),
            is_deleted: Set(c.is_deleted),
            is_verified: Set(c.is_verified),
            created_at: Set(c.created_at),
            updated_at: Set(c.updated_at),
        };
        let stored = am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        let details = match &record.details {
            Some(d) => Some(
                user_details::upsert_for_customer(
                    &self.db,
                    stored.id,
                    &d.first_name,
                    &d.last_name,
                    d.phone.clone(),
                    d.shipping_address.clone(),
                )
                .await?,
            ),
            None => None,
        };
        Ok(CustomerRecord { customer: stored, details })
    }

    async fn update(&self, record: CustomerRecord) -> Result<CustomerRecord, ServiceError> {
        let existing = customer::Entity::find_by_id(record.customer.id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .ok_or_else(|| ServiceError::not_found("customer"))?;
        let mut am: customer::ActiveModel = existing.into();
        am.email = Set(record.customer.email.clone());
        am.password = Set(record.customer.password.clone());
        am.is_deleted = Set(record.customer.is_deleted);
        am.is_verified = Set(record.customer.is_verified);
        am.updated_at = Set(record.customer.updated_at);
        let stored = am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;

        // The owned details row goes through its own persistence call.
        let details = match &record.details {
            Some(d) => Some(
                user_details::upsert_for_customer(
                    &self.db,
                    stored.id,
                    &d.first_name,
                    &d.last_name,
                    d.phone.clone(),
                    d.shipping_address.clone(),
                )
                .await?,
            ),
            None => user_details::find_by_customer(&self.db, stored.id).await?,
        };
        Ok(CustomerRecord { customer: stored, details })
    }

    async fn exists(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(customer::exists(&self.db, id).await?)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), ServiceError> {
        customer::hard_delete(&self.db, id).await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, ServiceError> {
        Ok(customer::delete_all(&self.db).await?)
    }
}

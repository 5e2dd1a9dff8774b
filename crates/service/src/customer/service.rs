use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use common::pagination::Pagination;

use crate::errors::ServiceError;
use crate::response::{ResponseCode, ResponseModel};

use super::domain::{CustomerDto, CustomerUpdate};
use super::mapper;
use super::repository::CustomerRepository;
use super::validator;

const NOT_FOUND_BY_ID: &str = "Customer not found with the selected ID";
const NOT_FOUND_BY_EMAIL: &str = "Customer not found with the selected email";
const EMPTY_LIST: &str = "No customers were found, the list may be empty";
const EMPTY_FILTERED_LIST: &str = "No customers were found with the selected parameter";
const NULL_BODY: &str = "Impossible to update, the body must not be null";

/// Customer business service independent of the persistence backend.
///
/// Domain outcomes (invalid input, not found, success) resolve to the coded
/// response envelope; only repository failures surface as `Err`.
pub struct CustomerService<R: CustomerRepository> {
    repo: Arc<R>,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Validate and persist a new customer.
    ///
    /// # Examples
    /// ```
    /// use service::customer::{service::CustomerService, repository::mock::MockCustomerRepository};
    /// use service::customer::domain::CustomerDto;
    /// use service::response::ResponseCode;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockCustomerRepository::default());
    /// let svc = CustomerService::new(repo);
    /// let dto = CustomerDto {
    ///     id: None,
    ///     email: "user@example.com".into(),
    ///     password: Some("secret".into()),
    ///     is_deleted: false,
    ///     is_verified: false,
    ///     details: None,
    /// };
    /// let resp = tokio_test::block_on(svc.add_customer(dto)).unwrap();
    /// assert_eq!(resp.code, ResponseCode::Created);
    /// assert_eq!(resp.single().unwrap().email, "user@example.com");
    /// ```
    #[instrument(skip(self, dto), fields(email = %dto.email))]
    pub async fn add_customer(&self, dto: CustomerDto) -> Result<ResponseModel<CustomerDto>, ServiceError> {
        if let Err(e) = validator::validate_customer(&dto) {
            return Ok(ResponseModel::new(ResponseCode::InvalidInput).with_details(e.to_string()));
        }
        let record = mapper::to_record(&dto);
        let created = self.repo.insert(record).await?;
        info!(customer_id = %created.customer.id, email = %created.customer.email, "customer_created");
        Ok(ResponseModel::with_payload(ResponseCode::Created, mapper::to_dto(&created)))
    }

    pub async fn get_customer_by_id(&self, id: Uuid) -> Result<ResponseModel<CustomerDto>, ServiceError> {
        match self.repo.find_by_id(id).await? {
            Some(found) => Ok(ResponseModel::with_payload(ResponseCode::Found, mapper::to_dto(&found))),
            None => Ok(ResponseModel::new(ResponseCode::NotFound).with_details(NOT_FOUND_BY_ID)),
        }
    }

    pub async fn get_customer_by_email(&self, email: &str) -> Result<ResponseModel<CustomerDto>, ServiceError> {
        match self.repo.find_by_email(email).await? {
            Some(found) => Ok(ResponseModel::with_payload(ResponseCode::Found, mapper::to_dto(&found))),
            None => Ok(ResponseModel::new(ResponseCode::NotFound).with_details(NOT_FOUND_BY_EMAIL)),
        }
    }

    pub async fn get_all_customers(&self) -> Result<ResponseModel<CustomerDto>, ServiceError> {
        let customers: Vec<CustomerDto> =
            self.repo.find_all().await?.iter().map(mapper::to_dto).collect();
        if customers.is_empty() {
            Ok(ResponseModel::new(ResponseCode::NotFound).with_details(EMPTY_LIST))
        } else {
            Ok(ResponseModel::with_list(ResponseCode::ListReturned, customers))
        }
    }

    pub async fn get_all_customers_paginated(&self, page: Pagination) -> Result<ResponseModel<CustomerDto>, ServiceError> {
        let customers: Vec<CustomerDto> =
            self.repo.find_page(page).await?.iter().map(mapper::to_dto).collect();
        if customers.is_empty() {
            Ok(ResponseModel::new(ResponseCode::NotFound).with_details(EMPTY_LIST))
        } else {
            Ok(ResponseModel::with_list(ResponseCode::ListReturned, customers))
        }
    }

    pub async fn get_customers_by_deleted_status(&self, is_deleted: bool) -> Result<ResponseModel<CustomerDto>, ServiceError> {
        let customers: Vec<CustomerDto> = self
            .repo
            .find_by_deleted_status(is_deleted)
            .await?
            .iter()
            .map(mapper::to_dto)
            .collect();
        if customers.is_empty() {
            Ok(ResponseModel::new(ResponseCode::NotFound).with_details(EMPTY_FILTERED_LIST))
        } else {
            Ok(ResponseModel::with_list(ResponseCode::ListReturned, customers))
        }
    }

    pub async fn get_customers_by_verified_status(&self, is_verified: bool) -> Result<ResponseModel<CustomerDto>, ServiceError> {
        let customers: Vec<CustomerDto> = self
            .repo
            .find_by_verified_status(is_verified)
            .await?
            .iter()
            .map(mapper::to_dto)
            .collect();
        if customers.is_empty() {
            Ok(ResponseModel::new(ResponseCode::NotFound).with_details(EMPTY_FILTERED_LIST))
        } else {
            Ok(ResponseModel::with_list(ResponseCode::ListReturned, customers))
        }
    }

    /// Partial update: each present field overwrites the stored one, absent
    /// fields stay untouched. A missing body always yields the null-body
    /// envelope, whether or not the id exists.
    #[instrument(skip(self, updates), fields(customer_id = %id))]
    pub async fn update_customer(&self, id: Uuid, updates: Option<CustomerUpdate>) -> Result<ResponseModel<CustomerDto>, ServiceError> {
        let Some(updates) = updates else {
            return Ok(ResponseModel::new(ResponseCode::InvalidInput).with_details(NULL_BODY));
        };
        let Some(mut record) = self.repo.find_by_id(id).await? else {
            return Ok(ResponseModel::new(ResponseCode::NotFound).with_details(NOT_FOUND_BY_ID));
        };

        if let Some(email) = updates.email {
            record.customer.email = email;
        }
        if let Some(password) = updates.password {
            record.customer.password = password;
        }
        if let Some(is_deleted) = updates.is_deleted {
            record.customer.is_deleted = is_deleted;
        }
        if let Some(is_verified) = updates.is_verified {
            record.customer.is_verified = is_verified;
        }
        if let Some(details) = updates.details {
            let merged = match record.details.take() {
                Some(mut existing) => {
                    existing.first_name = details.first_name;
                    existing.last_name = details.last_name;
                    existing.phone = details.phone;
                    existing.shipping_address = details.shipping_address;
                    existing
                }
                None => mapper::details_to_model(record.customer.id, &details),
            };
            record.details = Some(merged);
        }
        record.customer.updated_at = Utc::now().into();

        let updated = self.repo.update(record).await?;
        info!(customer_id = %updated.customer.id, "customer_updated");
        Ok(ResponseModel::with_payload(ResponseCode::Updated, mapper::to_dto(&updated)))
    }

    /// Overwrite the stored password only; any other field in the input is
    /// ignored here.
    #[instrument(skip(self, updates), fields(customer_id = %id))]
    pub async fn update_password(&self, id: Uuid, updates: Option<CustomerUpdate>) -> Result<ResponseModel<CustomerDto>, ServiceError> {
        let Some(mut record) = self.repo.find_by_id(id).await? else {
            return Ok(ResponseModel::new(ResponseCode::NotFound).with_details(NOT_FOUND_BY_ID));
        };
        match updates.and_then(|u| u.password) {
            Some(password) => {
                record.customer.password = password;
                record.customer.updated_at = Utc::now().into();
                let updated = self.repo.update(record).await?;
                info!(customer_id = %updated.customer.id, "customer_password_updated");
                Ok(ResponseModel::with_payload(ResponseCode::Updated, mapper::to_dto(&updated)))
            }
            None => Ok(ResponseModel::new(ResponseCode::InvalidInput).with_details(NULL_BODY)),
        }
    }

    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn delete_customer(&self, id: Uuid) -> Result<ResponseModel<CustomerDto>, ServiceError> {
        if !self.repo.exists(id).await? {
            return Ok(ResponseModel::new(ResponseCode::NotFound).with_details(NOT_FOUND_BY_ID));
        }
        self.repo.delete_by_id(id).await?;
        info!(customer_id = %id, "customer_deleted");
        Ok(ResponseModel::new(ResponseCode::Deleted).with_details("Customer eliminated"))
    }

    #[instrument(skip(self))]
    pub async fn delete_all_customers(&self) -> Result<ResponseModel<CustomerDto>, ServiceError> {
        let removed = self.repo.delete_all().await?;
        info!(removed, "all_customers_deleted");
        Ok(ResponseModel::new(ResponseCode::Deleted).with_details("All customers eliminated"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::domain::UserDetailsDto;
    use super::super::repository::mock::MockCustomerRepository;

    fn svc() -> CustomerService<MockCustomerRepository> {
        CustomerService::new(Arc::new(MockCustomerRepository::default()))
    }

    fn new_dto(email: &str, password: &str) -> CustomerDto {
        CustomerDto {
            id: None,
            email: email.to_string(),
            password: Some(password.to_string()),
            is_deleted: false,
            is_verified: false,
            details: None,
        }
    }

    async fn seed(svc: &CustomerService<MockCustomerRepository>, email: &str) -> Uuid {
        let resp = svc.add_customer(new_dto(email, "secret")).await.unwrap();
        resp.single().unwrap().id.unwrap()
    }

    #[tokio::test]
    async fn add_customer_round_trips_input() {
        let svc = svc();
        let resp = svc.add_customer(new_dto("a@b.com", "x")).await.unwrap();
        assert_eq!(resp.code, ResponseCode::Created);
        let dto = resp.single().unwrap();
        assert_eq!(dto.email, "a@b.com");
        assert_eq!(dto.password.as_deref(), Some("x"));
        assert!(dto.id.is_some());
        assert!(resp.details.is_none());
    }

    #[tokio::test]
    async fn add_customer_rejects_invalid_input() {
        let svc = svc();
        for dto in [new_dto("", "x"), new_dto("a@b.com", "")] {
            let resp = svc.add_customer(dto).await.unwrap();
            assert_eq!(resp.code, ResponseCode::InvalidInput);
            assert!(resp.payload.is_none());
            assert!(!resp.details.as_deref().unwrap_or_default().is_empty());
        }
    }

    #[tokio::test]
    async fn get_by_id_unknown_is_not_found() {
        let svc = svc();
        let resp = svc.get_customer_by_id(Uuid::new_v4()).await.unwrap();
        assert_eq!(resp.code, ResponseCode::NotFound);
        assert!(resp.payload.is_none());
        assert_eq!(resp.details.as_deref(), Some(NOT_FOUND_BY_ID));
    }

    #[tokio::test]
    async fn get_by_email_finds_seeded_customer() {
        let svc = svc();
        seed(&svc, "hit@example.com").await;

        let hit = svc.get_customer_by_email("hit@example.com").await.unwrap();
        assert_eq!(hit.code, ResponseCode::Found);
        assert_eq!(hit.single().unwrap().email, "hit@example.com");

        let miss = svc.get_customer_by_email("miss@example.com").await.unwrap();
        assert_eq!(miss.code, ResponseCode::NotFound);
        assert_eq!(miss.details.as_deref(), Some(NOT_FOUND_BY_EMAIL));
    }

    #[tokio::test]
    async fn get_all_empty_store_yields_empty_list_envelope() {
        let svc = svc();
        let resp = svc.get_all_customers().await.unwrap();
        assert_eq!(resp.code, ResponseCode::NotFound);
        assert_eq!(resp.details.as_deref(), Some(EMPTY_LIST));
    }

    #[tokio::test]
    async fn get_all_returns_list_envelope() {
        let svc = svc();
        seed(&svc, "a@example.com").await;
        seed(&svc, "b@example.com").await;

        let resp = svc.get_all_customers().await.unwrap();
        assert_eq!(resp.code, ResponseCode::ListReturned);
        assert_eq!(resp.list().map(|l| l.len()), Some(2));
    }

    #[tokio::test]
    async fn paginated_list_respects_page_bounds() {
        let svc = svc();
        for i in 0..5 {
            seed(&svc, &format!("user{}@example.com", i)).await;
        }
        let page = svc
            .get_all_customers_paginated(Pagination { page: 2, per_page: 2 })
            .await
            .unwrap();
        assert_eq!(page.code, ResponseCode::ListReturned);
        assert_eq!(page.list().map(|l| l.len()), Some(2));

        let past_end = svc
            .get_all_customers_paginated(Pagination { page: 9, per_page: 2 })
            .await
            .unwrap();
        assert_eq!(past_end.code, ResponseCode::NotFound);
    }

    #[tokio::test]
    async fn status_lookups_filter_by_flag() {
        let svc = svc();
        let id = seed(&svc, "flagged@example.com").await;
        let update = CustomerUpdate { is_verified: Some(true), ..Default::default() };
        svc.update_customer(id, Some(update)).await.unwrap();

        let verified = svc.get_customers_by_verified_status(true).await.unwrap();
        assert_eq!(verified.code, ResponseCode::ListReturned);
        assert_eq!(verified.list().map(|l| l.len()), Some(1));

        let deleted = svc.get_customers_by_deleted_status(true).await.unwrap();
        assert_eq!(deleted.code, ResponseCode::NotFound);
        assert_eq!(deleted.details.as_deref(), Some(EMPTY_FILTERED_LIST));
    }

    #[tokio::test]
    async fn update_without_body_is_rejected_regardless_of_id() {
        let svc = svc();
        let known = seed(&svc, "known@example.com").await;

        for id in [known, Uuid::new_v4()] {
            let resp = svc.update_customer(id, None).await.unwrap();
            assert_eq!(resp.code, ResponseCode::InvalidInput);
            assert_eq!(resp.details.as_deref(), Some(NULL_BODY));
        }
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let svc = svc();
        let resp = svc
            .update_customer(Uuid::new_v4(), Some(CustomerUpdate::default()))
            .await
            .unwrap();
        assert_eq!(resp.code, ResponseCode::NotFound);
    }

    #[tokio::test]
    async fn partial_update_leaves_other_fields_unchanged() {
        let svc = svc();
        let id = seed(&svc, "keep@example.com").await;

        let update = CustomerUpdate { is_verified: Some(true), ..Default::default() };
        let resp = svc.update_customer(id, Some(update)).await.unwrap();
        assert_eq!(resp.code, ResponseCode::Updated);
        let dto = resp.single().unwrap();
        assert_eq!(dto.email, "keep@example.com");
        assert_eq!(dto.password.as_deref(), Some("secret"));
        assert!(dto.is_verified);
        assert!(!dto.is_deleted);
    }

    #[tokio::test]
    async fn update_upserts_owned_details() {
        let svc = svc();
        let id = seed(&svc, "owner@example.com").await;

        let details = UserDetailsDto {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            phone: None,
            shipping_address: None,
        };
        let update = CustomerUpdate { details: Some(details), ..Default::default() };
        let resp = svc.update_customer(id, Some(update)).await.unwrap();
        let created = resp.single().unwrap().details.clone().unwrap();
        assert_eq!(created.first_name, "Ada");

        // A second details update overwrites the same owned record.
        let update = CustomerUpdate {
            details: Some(UserDetailsDto {
                first_name: "Ada".into(),
                last_name: "King".into(),
                phone: Some("+44 20 0000".into()),
                shipping_address: None,
            }),
            ..Default::default()
        };
        let resp = svc.update_customer(id, Some(update)).await.unwrap();
        let updated = resp.single().unwrap().details.clone().unwrap();
        assert_eq!(updated.last_name, "King");
        assert_eq!(updated.phone.as_deref(), Some("+44 20 0000"));
    }

    #[tokio::test]
    async fn update_password_flows() {
        let svc = svc();
        let id = seed(&svc, "pw@example.com").await;

        let missing = svc.update_password(Uuid::new_v4(), None).await.unwrap();
        assert_eq!(missing.code, ResponseCode::NotFound);

        let no_body = svc.update_password(id, None).await.unwrap();
        assert_eq!(no_body.code, ResponseCode::InvalidInput);
        assert_eq!(no_body.details.as_deref(), Some(NULL_BODY));

        let update = CustomerUpdate { password: Some("rotated".into()), ..Default::default() };
        let resp = svc.update_password(id, Some(update)).await.unwrap();
        assert_eq!(resp.code, ResponseCode::Updated);
        assert_eq!(resp.single().unwrap().password.as_deref(), Some("rotated"));
    }

    #[tokio::test]
    async fn delete_customer_confirms_or_reports_missing() {
        let svc = svc();
        let id = seed(&svc, "bye@example.com").await;

        let resp = svc.delete_customer(id).await.unwrap();
        assert_eq!(resp.code, ResponseCode::Deleted);
        assert_eq!(resp.details.as_deref(), Some("Customer eliminated"));

        let again = svc.delete_customer(id).await.unwrap();
        assert_eq!(again.code, ResponseCode::NotFound);
    }

    #[tokio::test]
    async fn delete_all_then_get_all_is_empty() {
        let svc = svc();
        seed(&svc, "one@example.com").await;
        seed(&svc, "two@example.com").await;

        let resp = svc.delete_all_customers().await.unwrap();
        assert_eq!(resp.code, ResponseCode::Deleted);
        assert_eq!(resp.details.as_deref(), Some("All customers eliminated"));

        let after = svc.get_all_customers().await.unwrap();
        assert_eq!(after.code, ResponseCode::NotFound);
        assert_eq!(after.details.as_deref(), Some(EMPTY_LIST));
    }

    #[tokio::test]
    async fn duplicate_email_surfaces_repository_error() {
        let svc = svc();
        seed(&svc, "dup@example.com").await;
        let err = svc.add_customer(new_dto("dup@example.com", "x")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
    }
}

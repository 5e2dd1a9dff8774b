//! Pure conversions between storage rows and customer transfer objects.

use chrono::Utc;
use models::{customer, user_details};
use uuid::Uuid;

use super::domain::{CustomerDto, UserDetailsDto};
use super::repository::CustomerRecord;

/// Storage row (plus owned details) to external DTO. The stored password is
/// carried on the DTO as the original contract does.
pub fn to_dto(record: &CustomerRecord) -> CustomerDto {
    CustomerDto {
        id: Some(record.customer.id),
        email: record.customer.email.clone(),
        password: Some(record.customer.password.clone()),
        is_deleted: record.customer.is_deleted,
        is_verified: record.customer.is_verified,
        details: record.details.as_ref().map(details_to_dto),
    }
}

pub fn details_to_dto(details: &user_details::Model) -> UserDetailsDto {
    UserDetailsDto {
        first_name: details.first_name.clone(),
        last_name: details.last_name.clone(),
        phone: details.phone.clone(),
        shipping_address: details.shipping_address.clone(),
    }
}

/// DTO to a fresh storage record. The id is taken from the DTO when present,
/// generated otherwise; missing optional fields map to defaults.
pub fn to_record(dto: &CustomerDto) -> CustomerRecord {
    let id = dto.id.unwrap_or_else(Uuid::new_v4);
    let now = Utc::now().into();
    let customer = customer::Model {
        id,
        email: dto.email.clone(),
        password: dto.password.clone().unwrap_or_default(),
        is_deleted: dto.is_deleted,
        is_verified: dto.is_verified,
        created_at: now,
        updated_at: now,
    };
    let details = dto.details.as_ref().map(|d| details_to_model(id, d));
    CustomerRecord { customer, details }
}

pub fn details_to_model(customer_id: Uuid, dto: &UserDetailsDto) -> user_details::Model {
    let now = Utc::now().into();
    user_details::Model {
        id: Uuid::new_v4(),
        customer_id,
        first_name: dto.first_name.clone(),
        last_name: dto.last_name.clone(),
        phone: dto.phone.clone(),
        shipping_address: dto.shipping_address.clone(),
        created_at: now,
        updated_at: now,
    }
}

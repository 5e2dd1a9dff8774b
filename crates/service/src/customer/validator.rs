use crate::errors::ServiceError;

use super::domain::CustomerDto;

/// Check the invariants a customer must satisfy before it is persisted.
/// Side-effect free; returns the violation as a descriptive message.
pub fn validate_customer(dto: &CustomerDto) -> Result<(), ServiceError> {
    if dto.email.trim().is_empty() {
        return Err(ServiceError::Validation("email must not be empty".into()));
    }
    if !dto.email.contains('@') {
        return Err(ServiceError::Validation("email must contain '@'".into()));
    }
    match &dto.password {
        Some(p) if !p.is_empty() => Ok(()),
        _ => Err(ServiceError::Validation("password must not be empty".into())),
    }
}

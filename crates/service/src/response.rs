//! Uniform response envelope returned by the customer service operations.
//!
//! Every operation resolves to a coded outcome plus either a payload (single
//! DTO or list) or a human-readable detail message, never both.

use serde::{Deserialize, Serialize};

/// Enumerated outcome of a service operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCode {
    InvalidInput,
    Created,
    Found,
    NotFound,
    ListReturned,
    Updated,
    Deleted,
}

impl ResponseCode {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ResponseCode::InvalidInput => 1001,
            ResponseCode::NotFound => 1003,
            ResponseCode::Created => 2001,
            ResponseCode::Found => 2002,
            ResponseCode::ListReturned => 2003,
            ResponseCode::Updated => 2004,
            ResponseCode::Deleted => 2005,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResponseCode::InvalidInput | ResponseCode::NotFound)
    }
}

/// Payload of a successful outcome: one DTO or a list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload<T> {
    One(T),
    Many(Vec<T>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseModel<T> {
    pub code: ResponseCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl<T> ResponseModel<T> {
    /// Envelope without payload; pair with `with_details` on error paths.
    pub fn new(code: ResponseCode) -> Self {
        Self { code, payload: None, details: None }
    }

    pub fn with_payload(code: ResponseCode, payload: T) -> Self {
        Self { code, payload: Some(Payload::One(payload)), details: None }
    }

    pub fn with_list(code: ResponseCode, items: Vec<T>) -> Self {
        Self { code, payload: Some(Payload::Many(items)), details: None }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// The single payload, if this outcome carries one.
    pub fn single(&self) -> Option<&T> {
        match &self.payload {
            Some(Payload::One(item)) => Some(item),
            _ => None,
        }
    }

    /// The list payload, if this outcome carries one.
    pub fn list(&self) -> Option<&[T]> {
        match &self.payload {
            Some(Payload::Many(items)) => Some(items),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        !self.code.is_error()
    }
}

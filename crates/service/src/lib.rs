//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Wraps customer outcomes in a coded response envelope.

pub mod errors;
pub mod response;
pub mod customer;
pub mod product;

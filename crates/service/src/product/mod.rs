//! Product module: three-layer architecture (domain, repository, service).
//!
//! Unlike the customer side, product operations report missing rows by
//! raising `ServiceError::NotFound` rather than returning an envelope.

pub mod domain;
pub mod mapper;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::ProductService;

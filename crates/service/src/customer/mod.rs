//! Customer module: three-layer architecture (domain, repository, service).
//!
//! Every operation resolves to the coded response envelope; only
//! infrastructure failures surface as errors.

pub mod domain;
pub mod mapper;
pub mod validator;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::CustomerService;

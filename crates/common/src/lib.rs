//! Shared utilities for the storefront workspace.

pub mod logging;
pub mod pagination;

//! Business layer of the catalog: DTOs, mappers, repositories and the
//! company/product services.
//! - Services depend on repository traits, never on a concrete store.
//! - Entity definitions and field validation live in the `models` crate.
//! - Failures are reported as [`errors::ServiceError`].

pub mod catalog;
pub mod company_service;
pub mod domain;
pub mod dto;
pub mod errors;
pub mod mapper;
pub mod product_service;
pub mod repository;
#[cfg(test)]
pub mod test_support;

pub use catalog::Catalog;

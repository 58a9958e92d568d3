//! Data access contracts and their implementations.
//!
//! Ids are allocated by the store behind each implementation; insert inputs
//! carry no id. Product reads always come back with their company resolved.

use async_trait::async_trait;

use crate::domain::{Company, NewCompany, Product, ProductDraft};
use crate::errors::ServiceError;

pub mod memory;
pub mod seaorm;

pub use memory::MemoryStore;
pub use seaorm::{SeaOrmCompanyRepository, SeaOrmProductRepository};

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn insert(&self, company: NewCompany) -> Result<Company, ServiceError>;
    /// All companies in store order (ascending id).
    async fn find_all(&self) -> Result<Vec<Company>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Company>, ServiceError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError>;
    async fn update(&self, company: Company) -> Result<Company, ServiceError>;
    /// Returns whether a row was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist `draft` owned by `company`.
    async fn insert(&self, draft: ProductDraft, company: Company) -> Result<Product, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Product>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError>;
    async fn find_by_company_id(&self, company_id: i64) -> Result<Vec<Product>, ServiceError>;
    async fn exists_by_company_id(&self, company_id: i64) -> Result<bool, ServiceError>;
    /// Persist scalars and the company reference of an existing product.
    async fn update(&self, product: Product) -> Result<Product, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError>;
}

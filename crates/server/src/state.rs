use std::sync::Arc;

use service::company_service::CompanyService;
use service::product_service::ProductService;
use service::Catalog;

/// Shared handler state; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub companies: Arc<CompanyService>,
    pub products: Arc<ProductService>,
}

impl From<Catalog> for AppState {
    fn from(c: Catalog) -> Self {
        Self { companies: c.companies, products: c.products }
    }
}

impl AppState {
    pub fn in_memory() -> Self {
        Catalog::in_memory().into()
    }
}

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::company_service::CompanyService;
use crate::product_service::ProductService;
use crate::repository::{MemoryStore, SeaOrmCompanyRepository, SeaOrmProductRepository};

/// Both services sharing one storage backend.
#[derive(Clone)]
pub struct Catalog {
    pub companies: Arc<CompanyService>,
    pub products: Arc<ProductService>,
}

impl Catalog {
    /// Process-local backend; state is lost on restart.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            companies: Arc::new(CompanyService::new(store.clone(), store.clone())),
            products: Arc::new(ProductService::new(store.clone(), store)),
        }
    }

    pub fn seaorm(db: DatabaseConnection) -> Self {
        let companies = Arc::new(SeaOrmCompanyRepository { db: db.clone() });
        let products = Arc::new(SeaOrmProductRepository { db });
        Self {
            companies: Arc::new(CompanyService::new(companies.clone(), products.clone())),
            products: Arc::new(ProductService::new(products, companies)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::ProductDto;
    use crate::test_support::company_dto;

    #[tokio::test]
    async fn in_memory_services_share_one_store() {
        let catalog = Catalog::in_memory();
        let company = catalog.companies.create(company_dto("shared")).await.unwrap();
        let product = catalog
            .products
            .create(ProductDto { name: Some("Bolt".into()), company_id: company.id, ..Default::default() })
            .await
            .unwrap();
        assert_eq!(product.company_name.as_deref(), Some("Co shared"));
    }
}

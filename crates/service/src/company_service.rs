use std::sync::Arc;

use tracing::{info, instrument};

use crate::dto::CompanyDto;
use crate::errors::ServiceError;
use crate::mapper::CompanyMapper;
use crate::repository::{CompanyRepository, ProductRepository};

/// Company use cases: create, list, fetch, partial update and guarded delete.
pub struct CompanyService {
    companies: Arc<dyn CompanyRepository>,
    products: Arc<dyn ProductRepository>,
}

impl CompanyService {
    pub fn new(companies: Arc<dyn CompanyRepository>, products: Arc<dyn ProductRepository>) -> Self {
        Self { companies, products }
    }

    /// Create a company. Any client-supplied id is discarded.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::{company_service::CompanyService, dto::CompanyDto, repository::MemoryStore};
    /// let store = Arc::new(MemoryStore::new());
    /// let svc = CompanyService::new(store.clone(), store);
    /// let dto = CompanyDto {
    ///     id: Some(500),
    ///     name: Some("Acme".into()),
    ///     cif: Some("B12345678".into()),
    ///     login: Some("acme".into()),
    ///     password: Some("secret".into()),
    ///     ..Default::default()
    /// };
    /// let created = tokio_test::block_on(svc.create(dto)).unwrap();
    /// assert_eq!(created.id, Some(1));
    /// ```
    #[instrument(skip(self, dto), fields(name = ?dto.name))]
    pub async fn create(&self, mut dto: CompanyDto) -> Result<CompanyDto, ServiceError> {
        dto.id = None;
        let new = CompanyMapper::to_entity(dto);
        new.validate()?;
        let saved = self.companies.insert(new).await?;
        info!(company_id = saved.id, "company_created");
        Ok(CompanyMapper::to_dto(&saved))
    }

    pub async fn list(&self) -> Result<Vec<CompanyDto>, ServiceError> {
        let companies = self.companies.find_all().await?;
        Ok(CompanyMapper::to_dto_list(&companies))
    }

    /// Absent ids yield `Ok(None)`; the caller picks the status.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<CompanyDto>, ServiceError> {
        Ok(self.companies.find_by_id(id).await?.map(|c| CompanyMapper::to_dto(&c)))
    }

    #[instrument(skip(self, dto))]
    pub async fn update(&self, id: i64, dto: CompanyDto) -> Result<CompanyDto, ServiceError> {
        let mut existing = self
            .companies
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("company", id))?;
        CompanyMapper::update_entity_from_dto(&dto, &mut existing);
        existing.validate()?;
        let updated = self.companies.update(existing).await?;
        info!(company_id = id, "company_updated");
        Ok(CompanyMapper::to_dto(&updated))
    }

    /// Fails with `NotFound` for unknown ids and `Conflict` while products
    /// still reference the company.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.companies.exists_by_id(id).await? {
            return Err(ServiceError::not_found("company", id));
        }
        if self.products.exists_by_company_id(id).await? {
            return Err(ServiceError::Conflict(format!("company {id} still has products")));
        }
        if !self.companies.delete_by_id(id).await? {
            return Err(ServiceError::not_found("company", id));
        }
        info!(company_id = id, "company_deleted");
        Ok(())
    }
}

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::domain::Company;
use crate::dto::ProductDto;
use crate::errors::ServiceError;
use crate::mapper::ProductMapper;
use crate::repository::{CompanyRepository, ProductRepository};

/// Product use cases. Every product belongs to an existing company, which
/// is resolved here before anything is persisted.
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
    companies: Arc<dyn CompanyRepository>,
}

impl ProductService {
    pub fn new(products: Arc<dyn ProductRepository>, companies: Arc<dyn CompanyRepository>) -> Self {
        Self { products, companies }
    }

    async fn company(&self, id: i64) -> Result<Option<Company>, ServiceError> {
        self.companies.find_by_id(id).await
    }

    /// Create a product for `dto.company_id`. A missing or unknown company is
    /// an `InvalidReference`. Any client-supplied id is discarded.
    #[instrument(skip(self, dto), fields(company_id = ?dto.company_id))]
    pub async fn create(&self, mut dto: ProductDto) -> Result<ProductDto, ServiceError> {
        dto.id = None;
        let company_id = dto
            .company_id
            .ok_or_else(|| ServiceError::InvalidReference("company id is required to create a product".into()))?;
        let company = self
            .company(company_id)
            .await?
            .ok_or_else(|| ServiceError::InvalidReference(format!("company {company_id} does not exist")))?;
        let draft = ProductMapper::to_entity(dto);
        models::product::validate_name(draft.name.as_deref())?;
        let saved = self.products.insert(draft, company).await?;
        info!(product_id = saved.id, company_id, "product_created");
        Ok(ProductMapper::to_dto(&saved))
    }

    pub async fn list(&self) -> Result<Vec<ProductDto>, ServiceError> {
        let products = self.products.find_all().await?;
        Ok(ProductMapper::to_dto_list(&products))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<ProductDto>, ServiceError> {
        Ok(self.products.find_by_id(id).await?.map(|p| ProductMapper::to_dto(&p)))
    }

    /// Products owned by `company_id`; `NotFound` when the company is absent.
    pub async fn list_by_company(&self, company_id: i64) -> Result<Vec<ProductDto>, ServiceError> {
        if !self.companies.exists_by_id(company_id).await? {
            return Err(ServiceError::not_found("company", company_id));
        }
        let products = self.products.find_by_company_id(company_id).await?;
        Ok(ProductMapper::to_dto_list(&products))
    }

    /// Partial update of name/stock/price. The company is only looked up when
    /// `dto.company_id` names a different one; otherwise the relation stays.
    #[instrument(skip(self, dto), fields(company_id = ?dto.company_id))]
    pub async fn update(&self, id: i64, dto: ProductDto) -> Result<ProductDto, ServiceError> {
        let mut existing = self
            .products
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("product", id))?;
        ProductMapper::update_entity_from_dto(&dto, &mut existing);
        models::product::validate_name(existing.name.as_deref())?;

        match dto.company_id {
            Some(new_id) if new_id != existing.company.id => {
                let company = self
                    .company(new_id)
                    .await?
                    .ok_or_else(|| ServiceError::not_found("company", new_id))?;
                debug!(product_id = id, from = existing.company.id, to = new_id, "product_company_reassigned");
                existing.company = company;
            }
            _ => {}
        }

        let updated = self.products.update(existing).await?;
        info!(product_id = id, "product_updated");
        Ok(ProductMapper::to_dto(&updated))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.products.exists_by_id(id).await? {
            return Err(ServiceError::not_found("product", id));
        }
        if !self.products.delete_by_id(id).await? {
            return Err(ServiceError::not_found("product", id));
        }
        info!(product_id = id, "product_deleted");
        Ok(())
    }
}

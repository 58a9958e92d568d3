//! SeaORM-backed repositories.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use models::{company, product};

use super::{CompanyRepository, ProductRepository};
use crate::domain::{Company, NewCompany, Product, ProductDraft};
use crate::errors::ServiceError;

fn update_err(entity: &'static str, id: i64) -> impl FnOnce(DbErr) -> ServiceError {
    move |e| match e {
        DbErr::RecordNotUpdated => ServiceError::not_found(entity, id),
        other => other.into(),
    }
}

fn with_company(row: product::Model, company: Option<company::Model>) -> Result<Product, ServiceError> {
    match company {
        Some(c) => Ok(Product::from_parts(row, c)),
        None => Err(ServiceError::Db(format!("product {} references missing company {}", row.id, row.company_id))),
    }
}

pub struct SeaOrmCompanyRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn insert(&self, new: NewCompany) -> Result<Company, ServiceError> {
        Ok(company::create(&self.db, new).await?)
    }

    async fn find_all(&self) -> Result<Vec<Company>, ServiceError> {
        Ok(company::Entity::find().order_by_asc(company::Column::Id).all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Company>, ServiceError> {
        Ok(company::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let n = company::Entity::find_by_id(id).count(&self.db).await?;
        Ok(n > 0)
    }

    async fn update(&self, c: Company) -> Result<Company, ServiceError> {
        let id = c.id;
        let am = company::ActiveModel {
            id: Unchanged(c.id),
            cif: Set(c.cif),
            name: Set(c.name),
            telephone: Set(c.telephone),
            email: Set(c.email),
            address: Set(c.address),
            login: Set(c.login),
            password: Set(c.password),
        };
        am.update(&self.db).await.map_err(update_err("company", id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let res = company::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn insert(&self, draft: ProductDraft, owner: Company) -> Result<Product, ServiceError> {
        let row = product::create(&self.db, draft.attach(owner.id)).await?;
        Ok(Product::from_parts(row, owner))
    }

    async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
        let rows = product::Entity::find()
            .find_also_related(company::Entity)
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await?;
        rows.into_iter().map(|(p, c)| with_company(p, c)).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError> {
        let found = product::Entity::find_by_id(id)
            .find_also_related(company::Entity)
            .one(&self.db)
            .await?;
        found.map(|(p, c)| with_company(p, c)).transpose()
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let n = product::Entity::find_by_id(id).count(&self.db).await?;
        Ok(n > 0)
    }

    async fn find_by_company_id(&self, company_id: i64) -> Result<Vec<Product>, ServiceError> {
        let rows = product::Entity::find()
            .filter(product::Column::CompanyId.eq(company_id))
            .find_also_related(company::Entity)
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await?;
        rows.into_iter().map(|(p, c)| with_company(p, c)).collect()
    }

    async fn exists_by_company_id(&self, company_id: i64) -> Result<bool, ServiceError> {
        let n = product::Entity::find()
            .filter(product::Column::CompanyId.eq(company_id))
            .count(&self.db)
            .await?;
        Ok(n > 0)
    }

    async fn update(&self, p: Product) -> Result<Product, ServiceError> {
        product::validate_name(p.name.as_deref())?;
        let id = p.id;
        let am = product::ActiveModel {
            id: Unchanged(p.id),
            name: Set(p.name.clone()),
            stock: Set(p.stock),
            price: Set(p.price),
            company_id: Set(p.company.id),
        };
        let row = am.update(&self.db).await.map_err(update_err("product", id))?;
        Ok(Product::from_parts(row, p.company))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let res = product::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

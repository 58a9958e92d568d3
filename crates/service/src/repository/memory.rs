use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use models::product;
use tokio::sync::RwLock;

use super::{CompanyRepository, ProductRepository};
use crate::domain::{Company, NewCompany, Product, ProductDraft};
use crate::errors::ServiceError;

/// Monotonic id source for one table. Ids start at 1 and are never reused.
#[derive(Debug)]
struct IdSequence {
    next: i64,
}

impl Default for IdSequence {
    fn default() -> Self { Self { next: 1 } }
}

impl IdSequence {
    fn allocate(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[derive(Debug, Default)]
struct Tables {
    companies: BTreeMap<i64, Company>,
    products: BTreeMap<i64, product::Model>,
    company_ids: IdSequence,
    product_ids: IdSequence,
}

impl Tables {
    fn check_company_unique(&self, cif: &str, login: &str, except: Option<i64>) -> Result<(), ServiceError> {
        for c in self.companies.values() {
            if Some(c.id) == except {
                continue;
            }
            if c.cif == cif {
                return Err(ServiceError::Conflict(format!("company cif '{cif}' already exists")));
            }
            if c.login == login {
                return Err(ServiceError::Conflict(format!("company login '{login}' already exists")));
            }
        }
        Ok(())
    }

    fn resolve(&self, row: &product::Model) -> Result<Product, ServiceError> {
        let company = self
            .companies
            .get(&row.company_id)
            .cloned()
            .ok_or_else(|| ServiceError::Db(format!("product {} references missing company {}", row.id, row.company_id)))?;
        Ok(Product::from_parts(row.clone(), company))
    }

    fn resolve_all<'a>(&self, rows: impl Iterator<Item = &'a product::Model>) -> Result<Vec<Product>, ServiceError> {
        rows.map(|r| self.resolve(r)).collect()
    }
}

/// In-process store implementing both repositories over shared tables.
///
/// Mirrors the relational schema: unique `cif`/`login`, the product → company
/// foreign key, and `RESTRICT` on deleting a referenced company.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl CompanyRepository for MemoryStore {
    async fn insert(&self, company: NewCompany) -> Result<Company, ServiceError> {
        company.validate()?;
        let mut t = self.inner.write().await;
        t.check_company_unique(&company.cif, &company.login, None)?;
        let id = t.company_ids.allocate();
        let row = Company {
            id,
            cif: company.cif,
            name: company.name,
            telephone: company.telephone,
            email: company.email,
            address: company.address,
            login: company.login,
            password: company.password,
        };
        t.companies.insert(id, row.clone());
        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Company>, ServiceError> {
        let t = self.inner.read().await;
        Ok(t.companies.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Company>, ServiceError> {
        let t = self.inner.read().await;
        Ok(t.companies.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let t = self.inner.read().await;
        Ok(t.companies.contains_key(&id))
    }

    async fn update(&self, company: Company) -> Result<Company, ServiceError> {
        let mut t = self.inner.write().await;
        if !t.companies.contains_key(&company.id) {
            return Err(ServiceError::not_found("company", company.id));
        }
        t.check_company_unique(&company.cif, &company.login, Some(company.id))?;
        t.companies.insert(company.id, company.clone());
        Ok(company)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let mut t = self.inner.write().await;
        if t.products.values().any(|p| p.company_id == id) {
            return Err(ServiceError::Conflict(format!("company {id} is still referenced by products")));
        }
        Ok(t.companies.remove(&id).is_some())
    }
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn insert(&self, draft: ProductDraft, company: Company) -> Result<Product, ServiceError> {
        product::validate_name(draft.name.as_deref())?;
        let mut t = self.inner.write().await;
        let owner = t
            .companies
            .get(&company.id)
            .cloned()
            .ok_or_else(|| ServiceError::Conflict(format!("company {} does not exist", company.id)))?;
        let id = t.product_ids.allocate();
        let new = draft.attach(owner.id);
        let row = product::Model { id, name: new.name, stock: new.stock, price: new.price, company_id: new.company_id };
        t.products.insert(id, row.clone());
        Ok(Product::from_parts(row, owner))
    }

    async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
        let t = self.inner.read().await;
        t.resolve_all(t.products.values())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError> {
        let t = self.inner.read().await;
        t.products.get(&id).map(|row| t.resolve(row)).transpose()
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let t = self.inner.read().await;
        Ok(t.products.contains_key(&id))
    }

    async fn find_by_company_id(&self, company_id: i64) -> Result<Vec<Product>, ServiceError> {
        let t = self.inner.read().await;
        t.resolve_all(t.products.values().filter(|p| p.company_id == company_id))
    }

    async fn exists_by_company_id(&self, company_id: i64) -> Result<bool, ServiceError> {
        let t = self.inner.read().await;
        Ok(t.products.values().any(|p| p.company_id == company_id))
    }

    async fn update(&self, p: Product) -> Result<Product, ServiceError> {
        product::validate_name(p.name.as_deref())?;
        let mut t = self.inner.write().await;
        if !t.products.contains_key(&p.id) {
            return Err(ServiceError::not_found("product", p.id));
        }
        let row = p.to_row();
        let resolved = t.resolve(&row).map_err(|_| {
            ServiceError::Conflict(format!("company {} does not exist", row.company_id))
        })?;
        t.products.insert(row.id, row);
        Ok(resolved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let mut t = self.inner.write().await;
        Ok(t.products.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_company(n: u32) -> NewCompany {
        NewCompany {
            cif: format!("B{n:08}"),
            name: format!("Company {n}"),
            telephone: None,
            email: None,
            address: None,
            login: format!("login{n}"),
            password: "pw".into(),
        }
    }

    #[tokio::test]
    async fn ids_are_allocated_by_the_store_and_not_reused() -> Result<(), ServiceError> {
        let store = MemoryStore::new();
        let a = CompanyRepository::insert(&store, new_company(1)).await?;
        let b = CompanyRepository::insert(&store, new_company(2)).await?;
        assert_eq!((a.id, b.id), (1, 2));
        assert!(CompanyRepository::delete_by_id(&store, b.id).await?);
        let c = CompanyRepository::insert(&store, new_company(3)).await?;
        assert_eq!(c.id, 3);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_cif_or_login_conflicts() -> Result<(), ServiceError> {
        let store = MemoryStore::new();
        CompanyRepository::insert(&store, new_company(1)).await?;
        let same_cif = NewCompany { login: "other".into(), ..new_company(1) };
        assert!(matches!(CompanyRepository::insert(&store, same_cif).await, Err(ServiceError::Conflict(_))));
        let same_login = NewCompany { cif: "X1".into(), ..new_company(1) };
        assert!(matches!(CompanyRepository::insert(&store, same_login).await, Err(ServiceError::Conflict(_))));
        Ok(())
    }

    #[tokio::test]
    async fn referenced_company_cannot_be_deleted() -> Result<(), ServiceError> {
        let store = MemoryStore::new();
        let c = CompanyRepository::insert(&store, new_company(1)).await?;
        let p = ProductRepository::insert(&store, ProductDraft::default(), c.clone()).await?;
        assert!(matches!(CompanyRepository::delete_by_id(&store, c.id).await, Err(ServiceError::Conflict(_))));
        assert!(ProductRepository::delete_by_id(&store, p.id).await?);
        assert!(CompanyRepository::delete_by_id(&store, c.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn product_insert_requires_stored_company() {
        let store = MemoryStore::new();
        let ghost = Company {
            id: 77,
            cif: "B1".into(),
            name: "Ghost".into(),
            telephone: None,
            email: None,
            address: None,
            login: "ghost".into(),
            password: "pw".into(),
        };
        let res = ProductRepository::insert(&store, ProductDraft::default(), ghost).await;
        assert!(matches!(res, Err(ServiceError::Conflict(_))));
    }

    #[tokio::test]
    async fn product_reads_resolve_current_company_name() -> Result<(), ServiceError> {
        let store = MemoryStore::new();
        let mut c = CompanyRepository::insert(&store, new_company(1)).await?;
        let p = ProductRepository::insert(&store, ProductDraft::default(), c.clone()).await?;
        c.name = "Renamed".into();
        CompanyRepository::update(&store, c).await?;
        let found = ProductRepository::find_by_id(&store, p.id).await?.expect("product");
        assert_eq!(found.company.name, "Renamed");
        Ok(())
    }

    #[tokio::test]
    async fn find_by_company_id_filters() -> Result<(), ServiceError> {
        let store = MemoryStore::new();
        let a = CompanyRepository::insert(&store, new_company(1)).await?;
        let b = CompanyRepository::insert(&store, new_company(2)).await?;
        ProductRepository::insert(&store, ProductDraft { name: Some("a1".into()), ..Default::default() }, a.clone()).await?;
        ProductRepository::insert(&store, ProductDraft { name: Some("b1".into()), ..Default::default() }, b.clone()).await?;
        ProductRepository::insert(&store, ProductDraft { name: Some("a2".into()), ..Default::default() }, a.clone()).await?;

        let names: Vec<_> = ProductRepository::find_by_company_id(&store, a.id)
            .await?
            .into_iter()
            .filter_map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["a1", "a2"]);
        assert!(ProductRepository::exists_by_company_id(&store, b.id).await?);
        assert!(ProductRepository::find_by_company_id(&store, 999).await?.is_empty());
        Ok(())
    }
}

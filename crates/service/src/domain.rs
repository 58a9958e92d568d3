use models::{company, product};

pub use models::company::NewCompany;

/// Persisted company row.
pub type Company = company::Model;

/// Scalar product fields taken from a DTO. It has no company: the service
/// resolves the owner and attaches it explicitly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub stock: Option<i32>,
    pub price: Option<f64>,
}

impl ProductDraft {
    pub fn attach(self, company_id: i64) -> product::NewProduct {
        product::NewProduct { name: self.name, stock: self.stock, price: self.price, company_id }
    }
}

/// Product with its owning company resolved eagerly.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: Option<String>,
    pub stock: Option<i32>,
    pub price: Option<f64>,
    pub company: Company,
}

impl Product {
    pub fn from_parts(row: product::Model, company: Company) -> Self {
        Self { id: row.id, name: row.name, stock: row.stock, price: row.price, company }
    }

    /// Flatten back to the stored row; the relation becomes the FK column.
    pub fn to_row(&self) -> product::Model {
        product::Model {
            id: self.id,
            name: self.name.clone(),
            stock: self.stock,
            price: self.price,
            company_id: self.company.id,
        }
    }
}

use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::{company, errors::ModelError};

pub const NAME_MAX: usize = 28;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: Option<String>,
    pub stock: Option<i32>,
    #[sea_orm(column_name = "prize")]
    pub price: Option<f64>,
    #[sea_orm(column_name = "company")]
    pub company_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Company,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Company => Entity::belongs_to(company::Entity)
                .from(Column::CompanyId)
                .to(company::Column::Id)
                .into(),
        }
    }
}

impl Related<company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert input; `company_id` must reference an existing company.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct NewProduct {
    pub name: Option<String>,
    pub stock: Option<i32>,
    pub price: Option<f64>,
    pub company_id: i64,
}

pub fn validate_name(name: Option<&str>) -> Result<(), ModelError> {
    match name {
        Some(n) if n.chars().count() > NAME_MAX => {
            Err(ModelError::Validation(format!("name must be at most {NAME_MAX} characters")))
        }
        _ => Ok(()),
    }
}

pub async fn create(db: &DatabaseConnection, input: NewProduct) -> Result<Model, ModelError> {
    validate_name(input.name.as_deref())?;
    let am = ActiveModel {
        id: NotSet,
        name: Set(input.name),
        stock: Set(input.stock),
        price: Set(input.price),
        company_id: Set(input.company_id),
    };
    Ok(am.insert(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_optional() {
        assert!(validate_name(None).is_ok());
    }

    #[test]
    fn name_limit_is_enforced() {
        assert!(validate_name(Some(&"x".repeat(NAME_MAX))).is_ok());
        assert!(validate_name(Some(&"x".repeat(NAME_MAX + 1))).is_err());
    }
}

use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, product};

pub const CIF_MAX: usize = 9;
pub const NAME_MAX: usize = 28;
pub const TELEPHONE_MAX: usize = 9;
pub const EMAIL_MAX: usize = 50;
pub const ADDRESS_MAX: usize = 100;
pub const LOGIN_MAX: usize = 20;
pub const PASSWORD_MAX: usize = 255;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub cif: String,
    pub name: String,
    pub telephone: Option<String>,
    pub email: Option<String>,
    #[sea_orm(column_name = "direction")]
    pub address: Option<String>,
    #[sea_orm(unique)]
    pub login: String,
    /// Stored as given; never serialized.
    #[serde(skip_serializing, default)]
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Product,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Product => Entity::has_many(product::Entity).into(),
        }
    }
}

impl Related<product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert input: everything but the id, which the store allocates.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct NewCompany {
    pub cif: String,
    pub name: String,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub login: String,
    pub password: String,
}

fn validate_len(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.chars().count() > max {
        return Err(ModelError::Validation(format!("{field} must be at most {max} characters")));
    }
    Ok(())
}

fn validate_required(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    validate_len(field, value, max)
}

fn validate_optional(field: &str, value: Option<&str>, max: usize) -> Result<(), ModelError> {
    match value {
        Some(v) => validate_len(field, v, max),
        None => Ok(()),
    }
}

pub fn validate_cif(cif: &str) -> Result<(), ModelError> { validate_required("cif", cif, CIF_MAX) }

pub fn validate_name(name: &str) -> Result<(), ModelError> { validate_required("name", name, NAME_MAX) }

pub fn validate_login(login: &str) -> Result<(), ModelError> { validate_required("login", login, LOGIN_MAX) }

pub fn validate_password(password: &str) -> Result<(), ModelError> {
    if password.is_empty() {
        return Err(ModelError::Validation("password required".into()));
    }
    validate_len("password", password, PASSWORD_MAX)
}

/// Contact fields shared by inserts and updates.
pub fn validate_contact(telephone: Option<&str>, email: Option<&str>, address: Option<&str>) -> Result<(), ModelError> {
    validate_optional("telephone", telephone, TELEPHONE_MAX)?;
    validate_optional("email", email, EMAIL_MAX)?;
    validate_optional("address", address, ADDRESS_MAX)
}

impl NewCompany {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_cif(&self.cif)?;
        validate_name(&self.name)?;
        validate_login(&self.login)?;
        validate_password(&self.password)?;
        validate_contact(self.telephone.as_deref(), self.email.as_deref(), self.address.as_deref())
    }
}

impl Model {
    /// Checks the mutable columns after a partial update.
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_name(&self.name)?;
        validate_contact(self.telephone.as_deref(), self.email.as_deref(), self.address.as_deref())
    }
}

pub async fn create(db: &DatabaseConnection, input: NewCompany) -> Result<Model, ModelError> {
    input.validate()?;
    let am = ActiveModel {
        id: NotSet,
        cif: Set(input.cif),
        name: Set(input.name),
        telephone: Set(input.telephone),
        email: Set(input.email),
        address: Set(input.address),
        login: Set(input.login),
        password: Set(input.password),
    };
    Ok(am.insert(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> NewCompany {
        NewCompany {
            cif: "B12345678".into(),
            name: "Acme".into(),
            telephone: Some("600111222".into()),
            email: Some("info@acme.test".into()),
            address: Some("Main St 1".into()),
            login: "acme".into(),
            password: "secret".into(),
        }
    }

    #[test]
    fn valid_company_passes() {
        assert!(acme().validate().is_ok());
    }

    #[test]
    fn cif_longer_than_nine_is_rejected() {
        let c = NewCompany { cif: "B123456789".into(), ..acme() };
        assert!(matches!(c.validate(), Err(ModelError::Validation(m)) if m.contains("cif")));
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        assert!(NewCompany { name: "  ".into(), ..acme() }.validate().is_err());
        assert!(NewCompany { login: String::new(), ..acme() }.validate().is_err());
        assert!(NewCompany { password: String::new(), ..acme() }.validate().is_err());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 28 two-byte characters still fit the name column
        let name: String = std::iter::repeat('ñ').take(NAME_MAX).collect();
        assert!(validate_name(&name).is_ok());
        let too_long: String = std::iter::repeat('ñ').take(NAME_MAX + 1).collect();
        assert!(validate_name(&too_long).is_err());
    }

    #[test]
    fn optional_contact_limits() {
        assert!(validate_contact(Some("6001112223"), None, None).is_err());
        assert!(validate_contact(None, Some(&"a".repeat(51)), None).is_err());
        assert!(validate_contact(None, None, Some(&"a".repeat(100))).is_ok());
    }

    #[test]
    fn password_is_not_serialized() {
        let m = Model {
            id: 1,
            cif: "B1".into(),
            name: "Acme".into(),
            telephone: None,
            email: None,
            address: None,
            login: "acme".into(),
            password: "secret".into(),
        };
        let json = serde_json::to_value(&m).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["name"], "Acme");
    }
}

#![cfg(test)]
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

use crate::company_service::CompanyService;
use crate::domain::{Company, NewCompany};
use crate::dto::CompanyDto;
use crate::product_service::ProductService;
use crate::repository::MemoryStore;
use models::db::{connect_with_config, DatabaseConfig};

// Migrations run once per test process.
static MIGRATED: OnceCell<bool> = OnceCell::const_new();
static SEQ: AtomicU32 = AtomicU32::new(0);

/// Both services wired to one fresh in-memory store.
pub fn memory_services() -> (CompanyService, ProductService) {
    let store = Arc::new(MemoryStore::new());
    let companies = CompanyService::new(store.clone(), store.clone());
    let products = ProductService::new(store.clone(), store);
    (companies, products)
}

/// A creatable company DTO; distinct tags give distinct cif and login.
pub fn company_dto(tag: &str) -> CompanyDto {
    let cif: String = format!("C{tag}").chars().take(9).collect();
    CompanyDto {
        name: Some(format!("Co {tag}")),
        address: Some(format!("{tag} street 1")),
        cif: Some(cif),
        login: Some(tag.chars().take(20).collect()),
        password: Some("secret".into()),
        ..Default::default()
    }
}

/// Unique across test runs against a persistent database.
pub fn new_company(tag: &str) -> NewCompany {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.subsec_nanos()).unwrap_or(0);
    let n = (nanos + SEQ.fetch_add(1, Ordering::SeqCst)) % 100_000_000;
    let prefix: String = tag.chars().take(11).collect();
    NewCompany {
        cif: format!("T{n:08}"),
        name: format!("Co {}", prefix),
        telephone: None,
        email: None,
        address: Some("Main street 1".into()),
        login: format!("{prefix}{n:08}"),
        password: "secret".into(),
    }
}

pub fn company_row(id: i64, tag: &str) -> Company {
    let n = new_company(tag);
    Company {
        id,
        cif: n.cif,
        name: n.name,
        telephone: n.telephone,
        email: n.email,
        address: n.address,
        login: n.login,
        password: n.password,
    }
}

/// Connection to a migrated database, or `None` when DB tests are disabled
/// (`SKIP_DB_TESTS` set, `DATABASE_URL` unset or unreachable).
pub async fn get_db() -> anyhow::Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    let Ok(url) = std::env::var("DATABASE_URL") else {
        return Ok(None);
    };
    let cfg = DatabaseConfig { url, max_connections: 10, min_connections: 1, ..Default::default() };

    let migrated = *MIGRATED
        .get_or_init(|| async {
            match connect_with_config(&cfg).await {
                Ok(db) => migration::Migrator::up(&db, None).await.is_ok(),
                Err(_) => false,
            }
        })
        .await;
    if !migrated {
        return Ok(None);
    }
    // fresh connection for the current test's runtime
    Ok(Some(connect_with_config(&cfg).await?))
}

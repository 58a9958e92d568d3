use std::net::SocketAddr;

use axum::Router;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::{routes, AppState};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app: Router = routes::build_router(AppState::in_memory(), CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_company_product_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/companies", app.base_url))
        .json(&json!({"name": "Acme", "cif": "B00000001", "login": "acme", "password": "pw", "address": "Main 1"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let company: Value = res.json().await?;
    let cid = company["id"].as_i64().unwrap_or_default();

    let res = client
        .post(format!("{}/api/products", app.base_url))
        .json(&json!({"name": "Widget", "stock": 5, "price": 1.5, "companyId": cid}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let product: Value = res.json().await?;
    assert_eq!(product["companyName"], "Acme");
    let pid = product["id"].as_i64().unwrap_or_default();

    let listed: Value = client
        .get(format!("{}/api/products/by-company/{cid}", app.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let res = client.delete(format!("{}/api/companies/{cid}", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = client.delete(format!("{}/api/products/{pid}", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = client.delete(format!("{}/api/companies/{cid}", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client.get(format!("{}/api/companies/{cid}", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

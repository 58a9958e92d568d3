use axum::{
    middleware,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::metrics;
use crate::openapi::{ApiDoc, HealthResponse};
use crate::state::AppState;

pub mod companies;
pub mod products;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, body = HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: ambient routes plus the company and
/// product resources.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let ambient = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics::metrics))
        .route("/api-docs/openapi.json", get(openapi_json));

    let companies = Router::new()
        .route("/api/companies", get(companies::list).post(companies::create))
        .route(
            "/api/companies/:id",
            get(companies::get).put(companies::update).delete(companies::delete),
        );

    let products = Router::new()
        .route("/api/products", get(products::list).post(products::create))
        .route("/api/products/by-company/:company_id", get(products::list_by_company))
        .route(
            "/api/products/:id",
            get(products::get).put(products::update).delete(products::delete),
        );

    ambient
        .merge(companies)
        .merge(products)
        .with_state(state)
        .route_layer(middleware::from_fn(metrics::track_requests))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

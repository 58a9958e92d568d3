use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::dto::ProductDto;

use crate::errors::JsonApiError;
use crate::extract::JsonBody;
use crate::openapi::{ErrorDoc, ProductDoc};
use crate::state::AppState;

#[utoipa::path(
    post, path = "/api/products", tag = "products",
    request_body = ProductDoc,
    responses(
        (status = 201, description = "Product created", body = ProductDoc),
        (status = 400, description = "companyId missing or unknown", body = ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<ProductDto>,
) -> Result<(StatusCode, Json<ProductDto>), JsonApiError> {
    let created = state.products.create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/products", tag = "products",
    responses((status = 200, description = "All products", body = [ProductDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ProductDto>>, JsonApiError> {
    Ok(Json(state.products.list().await?))
}

#[utoipa::path(
    get, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product", body = ProductDoc),
        (status = 404, description = "No such product", body = ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<ProductDto>, JsonApiError> {
    state
        .products
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("product", id))
}

#[utoipa::path(
    get, path = "/api/products/by-company/{company_id}", tag = "products",
    params(("company_id" = i64, Path, description = "Owning company id")),
    responses(
        (status = 200, description = "Products of the company", body = [ProductDoc]),
        (status = 404, description = "No such company", body = ErrorDoc)
    )
)]
pub async fn list_by_company(
    State(state): State<AppState>,
    Path(company_id): Path<i64>,
) -> Result<Json<Vec<ProductDto>>, JsonApiError> {
    Ok(Json(state.products.list_by_company(company_id).await?))
}

#[utoipa::path(
    put, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductDoc,
    responses(
        (status = 200, description = "Product updated", body = ProductDoc),
        (status = 400, description = "Invalid field", body = ErrorDoc),
        (status = 404, description = "No such product or company", body = ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(dto): JsonBody<ProductDto>,
) -> Result<Json<ProductDto>, JsonApiError> {
    Ok(Json(state.products.update(id, dto).await?))
}

#[utoipa::path(
    delete, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "No such product", body = ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    state.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

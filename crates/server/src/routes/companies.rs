use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::dto::CompanyDto;

use crate::errors::JsonApiError;
use crate::extract::JsonBody;
use crate::openapi::{CompanyDoc, ErrorDoc};
use crate::state::AppState;

#[utoipa::path(
    post, path = "/api/companies", tag = "companies",
    request_body = CompanyDoc,
    responses(
        (status = 201, description = "Company created", body = CompanyDoc),
        (status = 400, description = "Missing or oversized field", body = ErrorDoc),
        (status = 409, description = "cif or login already taken", body = ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CompanyDto>,
) -> Result<(StatusCode, Json<CompanyDto>), JsonApiError> {
    let created = state.companies.create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/companies", tag = "companies",
    responses((status = 200, description = "All companies", body = [CompanyDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CompanyDto>>, JsonApiError> {
    Ok(Json(state.companies.list().await?))
}

#[utoipa::path(
    get, path = "/api/companies/{id}", tag = "companies",
    params(("id" = i64, Path, description = "Company id")),
    responses(
        (status = 200, description = "Company", body = CompanyDoc),
        (status = 404, description = "No such company", body = ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<CompanyDto>, JsonApiError> {
    state
        .companies
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("company", id))
}

#[utoipa::path(
    put, path = "/api/companies/{id}", tag = "companies",
    params(("id" = i64, Path, description = "Company id")),
    request_body = CompanyDoc,
    responses(
        (status = 200, description = "Company updated", body = CompanyDoc),
        (status = 400, description = "Oversized field", body = ErrorDoc),
        (status = 404, description = "No such company", body = ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(dto): JsonBody<CompanyDto>,
) -> Result<Json<CompanyDto>, JsonApiError> {
    Ok(Json(state.companies.update(id, dto).await?))
}

#[utoipa::path(
    delete, path = "/api/companies/{id}", tag = "companies",
    params(("id" = i64, Path, description = "Company id")),
    responses(
        (status = 204, description = "Company deleted"),
        (status = 404, description = "No such company", body = ErrorDoc),
        (status = 409, description = "Company still owns products", body = ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    state.companies.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

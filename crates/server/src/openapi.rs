use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

/// Wire shape of a company. `password` is accepted on input only.
#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct CompanyDoc {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub cif: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
}

/// Wire shape of a product; `prize` is accepted as an alias of `price`.
#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct ProductDoc {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub stock: Option<i32>,
    pub price: Option<f64>,
    pub companyId: Option<i64>,
    pub companyName: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::companies::create,
        crate::routes::companies::list,
        crate::routes::companies::get,
        crate::routes::companies::update,
        crate::routes::companies::delete,
        crate::routes::products::create,
        crate::routes::products::list,
        crate::routes::products::get,
        crate::routes::products::list_by_company,
        crate::routes::products::update,
        crate::routes::products::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            CompanyDoc,
            ProductDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "companies"),
        (name = "products")
    )
)]
pub struct ApiDoc;

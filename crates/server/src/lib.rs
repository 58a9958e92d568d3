//! HTTP surface of the catalog: axum router, handlers, error mapping,
//! Prometheus metrics and the OpenAPI document.

pub mod errors;
pub mod extract;
pub mod metrics;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::run;
pub use state::AppState;

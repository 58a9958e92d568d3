//! Entity ↔ DTO translation. Mappers never touch ids on the way in and never
//! resolve relations; that is the services' job.

pub mod company;
pub mod product;

pub use company::CompanyMapper;
pub use product::ProductMapper;

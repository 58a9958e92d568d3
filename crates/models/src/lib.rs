//! SeaORM entities for the catalog (`company`, `product`), field validation
//! and database connection helpers.

pub mod errors;
pub mod db;
pub mod company;
pub mod product;

#[cfg(test)]
mod tests;

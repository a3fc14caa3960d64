//! Database access layer: error categorization, row models, and the products
//! repository.

pub mod errors;
pub mod handlers;
pub mod models;

//! Database entity models.

pub mod products;

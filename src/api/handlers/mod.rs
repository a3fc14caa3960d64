pub mod products;
pub mod static_assets;

//! Database models for products.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Insert payload for a new product row. The store assigns `id` and the audit
/// timestamps.
#[derive(Debug, Clone)]
pub struct ProductCreateDBRequest {
    pub name: String,
    pub price: i64,
    pub user_id: String,
}

/// Full product row as stored, audit timestamps included. `deleted_at` is
/// `Some` only for soft-deleted rows, which normal queries never return.
#[derive(Debug, Clone, FromRow)]
pub struct ProductDBResponse {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

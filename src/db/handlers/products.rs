use crate::db::{
    errors::{DbError, Result},
    models::products::{ProductCreateDBRequest, ProductDBResponse},
};
use sqlx::PgConnection;

pub struct Products<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Products<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// List live products owned by `user_id`, in store-native order.
    ///
    /// An empty filter never means "all products": it short-circuits to an
    /// empty result without touching the store.
    pub async fn find_by_user(&mut self, user_id: &str) -> Result<Vec<ProductDBResponse>> {
        if user_id.is_empty() {
            return Ok(Vec::new());
        }

        let products = sqlx::query_as::<_, ProductDBResponse>(
            "SELECT id, name, price, user_id, created_at, updated_at, deleted_at
             FROM products
             WHERE user_id = $1 AND deleted_at IS NULL",
        )
        .bind(user_id)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(products)
    }

    /// Insert a new product and return the fully populated row, with the
    /// server-assigned id and timestamps.
    pub async fn create(&mut self, request: &ProductCreateDBRequest) -> Result<ProductDBResponse> {
        let product = sqlx::query_as::<_, ProductDBResponse>(
            "INSERT INTO products (name, price, user_id)
             VALUES ($1, $2, $3)
             RETURNING id, name, price, user_id, created_at, updated_at, deleted_at",
        )
        .bind(&request.name)
        .bind(request.price)
        .bind(&request.user_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(product)
    }

    /// Soft-delete the product with the given textual id, returning the number
    /// of rows marked. Zero rows (unknown or already-deleted id) is success;
    /// the caller decides what zero means.
    pub async fn delete_by_id(&mut self, id: &str) -> Result<u64> {
        let id: i64 = id.parse().map_err(|_| DbError::MalformedId(id.to_string()))?;

        let result = sqlx::query(
            "UPDATE products
             SET deleted_at = now(), updated_at = now()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&mut *self.db)
        .await?;

        Ok(result.rows_affected())
    }
}

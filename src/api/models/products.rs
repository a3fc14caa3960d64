//! API request/response models for products.

use crate::db::models::products::ProductDBResponse;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters for listing products
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsQuery {
    /// Owner to filter by. Absent or empty always yields an empty list,
    /// never the whole table.
    #[serde(default)]
    pub user_id: String,
}

/// Request body for creating a new product. The store assigns `id` and the
/// audit timestamps; there is no field for a client to supply them through.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    #[schema(example = "Pen")]
    pub name: String,
    /// Unit price; the store rejects negative values
    #[schema(example = 100)]
    pub price: i64,
    /// Opaque owner identifier supplied by the client
    #[schema(example = "u1")]
    pub user_id: String,
}

/// Product as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub user_id: String,
}

impl From<ProductDBResponse> for ProductResponse {
    fn from(db: ProductDBResponse) -> Self {
        Self {
            id: db.id,
            name: db.name,
            price: db.price,
            user_id: db.user_id,
        }
    }
}

/// Fixed-message success body (deletes).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_response_serializes_user_id_as_camel_case() {
        let response = ProductResponse {
            id: 1,
            name: "Pen".to_string(),
            price: 100,
            user_id: "u1".to_string(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"id": 1, "name": "Pen", "price": 100, "userId": "u1"}));
    }

    #[test]
    fn create_rejects_non_numeric_price() {
        let body = json!({"name": "Pen", "price": "free", "userId": "u1"});
        assert!(serde_json::from_value::<ProductCreate>(body).is_err());
    }

    #[test]
    fn create_rejects_missing_name() {
        let body = json!({"price": 100, "userId": "u1"});
        assert!(serde_json::from_value::<ProductCreate>(body).is_err());
    }

    #[test]
    fn create_ignores_client_supplied_id_and_timestamps() {
        let body = json!({
            "id": 999,
            "createdAt": "2024-01-01T00:00:00Z",
            "name": "Pen",
            "price": 100,
            "userId": "u1"
        });

        let create: ProductCreate = serde_json::from_value(body).unwrap();
        assert_eq!(create.name, "Pen");
        assert_eq!(create.price, 100);
        assert_eq!(create.user_id, "u1");
    }

    #[test]
    fn list_query_defaults_to_empty_user_id() {
        let query: ListProductsQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(query.user_id, "");
    }
}

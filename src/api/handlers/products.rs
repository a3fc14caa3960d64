use crate::AppState;
use crate::api::models::products::{ListProductsQuery, MessageResponse, ProductCreate, ProductResponse};
use crate::db::handlers::Products;
use crate::db::models::products::ProductCreateDBRequest;
use crate::errors::{Error, ErrorResponse, Result};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};

#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    summary = "List products for a user",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "Live products owned by the given user; empty array without a filter", body = Vec<ProductResponse>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Vec<ProductResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Products::new(&mut conn);

    let products = repo.find_by_user(&query.user_id).await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    summary = "Create product",
    request_body = ProductCreate,
    responses(
        (status = 200, description = "Product created, id and timestamps assigned by the store", body = ProductResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductCreate>, JsonRejection>,
) -> Result<Json<ProductResponse>> {
    let Json(create) = payload.map_err(|rejection| Error::BadRequest {
        message: rejection.body_text(),
    })?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Products::new(&mut conn);

    let request = ProductCreateDBRequest {
        name: create.name,
        price: create.price,
        user_id: create.user_id,
    };
    let product = repo.create(&request).await?;

    Ok(Json(ProductResponse::from(product)))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    summary = "Delete product",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product soft-deleted (or already absent)", body = MessageResponse),
        (status = 500, description = "Delete failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_product(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<MessageResponse>> {
    let mut conn = state
        .db
        .acquire()
        .await
        .map_err(|e| Error::DeleteFailed { source: e.into() })?;
    let mut repo = Products::new(&mut conn);

    let affected = repo.delete_by_id(&id).await.map_err(|source| Error::DeleteFailed { source })?;
    if affected == 0 {
        // Soft-delete of an unknown or already-deleted id; reported as success.
        tracing::debug!("delete of product {} matched no live rows", id);
    }

    Ok(Json(MessageResponse {
        message: "削除完了".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn list_without_user_id_is_always_empty(pool: PgPool) {
        let server = create_test_app(pool).await;

        // Seed a product so "no filter" demonstrably differs from "all rows".
        let created = server
            .post("/products")
            .json(&json!({"name": "Pen", "price": 100, "userId": "u1"}))
            .await;
        created.assert_status_ok();

        let response = server.get("/products").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!([]));

        let response = server.get("/products").add_query_param("userId", "").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!([]));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn create_then_list_round_trips(pool: PgPool) {
        let server = create_test_app(pool).await;

        let created = server
            .post("/products")
            .json(&json!({"name": "Pen", "price": 100, "userId": "u1"}))
            .await;
        created.assert_status_ok();

        let product: Value = created.json();
        assert!(product["id"].as_i64().unwrap() > 0);
        assert_eq!(product["name"], "Pen");
        assert_eq!(product["price"], 100);
        assert_eq!(product["userId"], "u1");

        let listed = server.get("/products").add_query_param("userId", "u1").await;
        listed.assert_status_ok();
        assert_eq!(listed.json::<Value>(), json!([product]));

        // Other users see nothing.
        let other = server.get("/products").add_query_param("userId", "u2").await;
        assert_eq!(other.json::<Value>(), json!([]));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn created_products_get_distinct_server_assigned_ids(pool: PgPool) {
        let server = create_test_app(pool).await;

        let first: Value = server
            .post("/products")
            .json(&json!({"name": "Pen", "price": 100, "userId": "u1"}))
            .await
            .json();
        let second: Value = server
            .post("/products")
            .json(&json!({"name": "Pen", "price": 100, "userId": "u1"}))
            .await
            .json();

        assert_ne!(first["id"], second["id"]);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn client_supplied_id_is_ignored_on_create(pool: PgPool) {
        let server = create_test_app(pool).await;

        let created = server
            .post("/products")
            .json(&json!({"id": 999, "name": "Pen", "price": 100, "userId": "u1"}))
            .await;
        created.assert_status_ok();
        assert_ne!(created.json::<Value>()["id"], json!(999));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn malformed_body_returns_400_with_error_body(pool: PgPool) {
        let server = create_test_app(pool).await;

        // Non-numeric price
        let response = server
            .post("/products")
            .json(&json!({"name": "Pen", "price": "free", "userId": "u1"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(!response.json::<Value>()["error"].as_str().unwrap().is_empty());

        // Missing name
        let response = server.post("/products").json(&json!({"price": 100, "userId": "u1"})).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(!response.json::<Value>()["error"].as_str().unwrap().is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn negative_price_is_a_storage_error(pool: PgPool) {
        let server = create_test_app(pool).await;

        let response = server
            .post("/products")
            .json(&json!({"name": "Pen", "price": -5, "userId": "u1"}))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!response.json::<Value>()["error"].as_str().unwrap().is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn delete_is_idempotent_and_hides_the_product(pool: PgPool) {
        let server = create_test_app(pool).await;

        let created: Value = server
            .post("/products")
            .json(&json!({"name": "Pen", "price": 100, "userId": "u1"}))
            .await
            .json();
        let id = created["id"].as_i64().unwrap();

        let first = server.delete(&format!("/products/{id}")).await;
        first.assert_status_ok();
        assert_eq!(first.json::<Value>(), json!({"message": "削除完了"}));

        // Deleting again (zero rows matched) still succeeds.
        let second = server.delete(&format!("/products/{id}")).await;
        second.assert_status_ok();
        assert_eq!(second.json::<Value>(), json!({"message": "削除完了"}));

        let listed = server.get("/products").add_query_param("userId", "u1").await;
        assert_eq!(listed.json::<Value>(), json!([]));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn malformed_delete_id_returns_fixed_error_message(pool: PgPool) {
        let server = create_test_app(pool).await;

        let response = server.delete("/products/not-a-number").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.json::<Value>(), json!({"error": "削除に失敗しました"}));
    }
}

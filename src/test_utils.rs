//! Test utilities for integration testing.

use axum_test::TestServer;
use sqlx::PgPool;

use crate::config::Config;
use crate::{AppState, build_router};

/// Build a test server over the real router, backed by the given pool.
pub async fn create_test_app(pool: PgPool) -> TestServer {
    let state = AppState {
        db: pool,
        config: create_test_config(),
    };

    TestServer::new(build_router(state)).expect("Failed to create test server")
}

pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        // Tests receive a pool directly; the URL is never dialed.
        database_url: String::new(),
    }
}

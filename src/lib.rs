//! # shelfd: a small product catalog backend
//!
//! `shelfd` is a minimal HTTP CRUD service for a single "Product" resource,
//! backed by PostgreSQL, bundled with a static front-end. It accepts JSON over
//! HTTP, maps it onto rows in one table, and returns JSON back.
//!
//! ## Architecture
//!
//! The service is built on [Axum](https://github.com/tokio-rs/axum) for the
//! HTTP layer and uses PostgreSQL via sqlx for persistence.
//!
//! The **API layer** ([`api`]) exposes three routes: `GET /products?userId=`
//! lists the live products owned by one user, `POST /products` creates a
//! product (the store assigns the id and timestamps), and
//! `DELETE /products/{id}` soft-deletes one. The front-end is embedded into
//! the binary and served at `/` and `/static/*`.
//!
//! The **database layer** ([`db`]) uses the repository pattern: the
//! [`db::handlers::Products`] repository wraps a connection and owns query
//! construction. Deletes are soft - rows get a `deleted_at` timestamp and
//! drop out of normal queries, so ids stay unique forever.
//!
//! Handlers share state through [`AppState`], passed in when the router is
//! built; there is no ambient global storage handle.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use shelfd::{Application, Config, config::Args, telemetry};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = Args::parse();
//!     let config = Config::load(&args);
//!
//!     telemetry::init_telemetry()?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await
//! }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module: `PORT` (default 8000), and either
//! `DATABASE_URL` or the discrete `DB_HOST`/`DB_USER`/`DB_PASSWORD`/
//! `DB_NAME`/`DB_PORT` variables.

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
mod static_assets;
pub mod telemetry;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;

use axum::{
    Json, Router,
    routing::{delete, get},
};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, debug, info, instrument};
use utoipa::OpenApi;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
}

/// Get the database migrator (runs the embedded `migrations/` directory)
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Build the application router: product API, health check, OpenAPI document,
/// and the embedded static front-end, with tracing middleware applied.
#[instrument(skip_all)]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(|| async { Json(openapi::ApiDoc::openapi()) }))
        .route(
            "/products",
            get(api::handlers::products::list_products).post(api::handlers::products::create_product),
        )
        .route("/products/{id}", delete(api::handlers::products::delete_product))
        .route("/", get(api::handlers::static_assets::serve_index))
        .route("/static/{*path}", get(api::handlers::static_assets::serve_static))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Main application struct that owns all resources and lifecycle.
///
/// 1. **Create**: [`Application::new`] connects the pool and runs migrations;
///    any failure is fatal - there is no retry or degraded mode.
/// 2. **Serve**: [`Application::serve`] binds the TCP port and handles
///    requests until the shutdown future resolves.
pub struct Application {
    router: Router,
    config: Config,
    pool: PgPool,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting with configuration: {:?}", config);

        let pool = PgPool::connect(&config.database_url).await?;
        migrator().run(&pool).await?;
        info!("Database connection established");

        let state = AppState {
            db: pool.clone(),
            config: config.clone(),
        };
        let router = build_router(state);

        Ok(Self { router, config, pool })
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "Listening on http://{}, available at http://localhost:{}",
            bind_addr, self.config.port
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}

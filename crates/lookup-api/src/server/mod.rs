//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use lookup_common::{AppConfig, AppError, AppResult, StorageBackend};
use lookup_core::{Category, Role, Tag};
use lookup_db::{
    create_pool, InMemoryLookupRepository, InMemoryStoreHealth, PgLookupRepository, PgStoreHealth,
    PoolConfig, TableName,
};
use lookup_service::{ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// # Errors
/// Returns a configuration error if the middleware settings are rejected
pub fn create_app(state: AppState) -> AppResult<Router> {
    let config = state.config();

    let api = apply_middleware_with_config(
        create_router(state.service_context()),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let health = apply_middleware(health_routes());

    Ok(api.merge(health).with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let service_context = match config.storage.backend {
        StorageBackend::Postgres => postgres_context(&config).await?,
        StorageBackend::Memory => memory_context()?,
    };

    Ok(AppState::new(service_context, config))
}

async fn postgres_context(config: &AppConfig) -> AppResult<ServiceContext> {
    let database = config
        .database
        .as_ref()
        .ok_or_else(|| AppError::config("DATABASE_URL is required for the postgres backend"))?;

    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    ServiceContextBuilder::new()
        .category_repo(Arc::new(PgLookupRepository::<Category>::new(
            pool.clone(),
            table("categories")?,
        )))
        .role_repo(Arc::new(PgLookupRepository::<Role>::new(pool.clone(), table("roles")?)))
        .tag_repo(Arc::new(PgLookupRepository::<Tag>::new(pool.clone(), table("tags")?)))
        .store_health(Arc::new(PgStoreHealth::new(pool)))
        .build()
        .map_err(AppError::config)
}

fn memory_context() -> AppResult<ServiceContext> {
    info!("Using in-memory storage");

    ServiceContextBuilder::new()
        .category_repo(Arc::new(InMemoryLookupRepository::<Category>::new()))
        .role_repo(Arc::new(InMemoryLookupRepository::<Role>::new()))
        .tag_repo(Arc::new(InMemoryLookupRepository::<Tag>::new()))
        .store_health(Arc::new(InMemoryStoreHealth))
        .build()
        .map_err(AppError::config)
}

fn table(name: &str) -> AppResult<TableName> {
    TableName::new(name).map_err(AppError::config)
}

/// Run the HTTP server until a shutdown signal arrives
pub async fn run_server(app: Router, listener: TcpListener) -> AppResult<()> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Server(e.to_string()))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.api.address();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state)?;

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
            }
            Err(_) => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }

    info!("Shutdown signal received");
}

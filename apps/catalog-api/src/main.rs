//! Catalog API - REST service for the clothing store product catalog

use axum_helpers::server::{close_postgres, create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use domain_products::{PgProductRepository, ProductService};
use migration::Migrator;
use tracing::info;

mod api;
mod config;
mod openapi;
mod seed;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        "Starting {} v{} ({:?})",
        config.app.name, config.app.version, config.environment
    );

    let db = connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    if config.run_migrations {
        run_migrations::<Migrator>(&db, config.app.name).await?;
    }

    if config.seed_sample_data {
        let service = ProductService::new(PgProductRepository::new(db.clone()));
        seed::seed_sample_data(&service)
            .await
            .map_err(|e| eyre::eyre!("Seeding sample data failed: {}", e))?;
    }

    let state = AppState { config, db };

    // create_router adds docs/middleware to our composed routes
    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes, &state.config.cors_origins)?;

    // - /health: liveness check with app name/version
    // - /ready: readiness check against PostgreSQL
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.db.clone()));

    let server = state.config.server.clone();
    let db = state.db;
    create_production_app(app, &server, server.shutdown_timeout, async move {
        info!("Shutting down: closing database connections");
        close_postgres(db, "catalog").await;
    })
    .await?;

    info!("Catalog API shutdown complete");
    Ok(())
}

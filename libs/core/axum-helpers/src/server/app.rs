use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::{create_cors_layer, parse_allowed_origins, security_headers};
use axum::{Router, ServiceExt, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower::Layer;
use tower_http::compression::CompressionLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - OpenAPI documentation (Swagger UI, ReDoc, RapiDoc, Scalar)
/// - API routes nested under `/api`
/// - Common middleware (tracing, security headers, CORS, compression)
/// - JSON 404 and 405 fallbacks
///
/// Health endpoints (`/health`, `/ready`) are merged in by the app.
///
/// # CORS
///
/// `cors_origins` is a comma-separated origin list, usually taken from
/// `CORS_ALLOWED_ORIGIN`:
/// - Development: `http://localhost:3000,http://localhost:5173`
/// - Production: `https://shop.example.com`
///
/// # Errors
/// Returns `InvalidInput` when the origin list is empty or contains a value
/// that is not a valid header.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::create_router;
///
/// let api_routes = Router::new().nest("/products", products_router);
/// let router = create_router::<ApiDoc>(api_routes, "http://localhost:3000")?;
/// ```
pub fn create_router<T>(apis: Router, cors_origins: &str) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let allowed_origins = parse_allowed_origins(cors_origins)?;
    info!("CORS configured with allowed origins: {}", cors_origins);

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(create_cors_layer(allowed_origins))
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Router wrapped by [`normalize_trailing_slash`]
pub type NormalizedRouter = NormalizePath<Router>;

/// Wraps the router so `/api/products/` and `/api/products` resolve to the
/// same route. Must wrap the whole router since routing happens inside it.
pub fn normalize_trailing_slash(router: Router) -> NormalizedRouter {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Production server with coordinated shutdown and cleanup.
///
/// - Stops accepting connections on SIGINT/SIGTERM and drains in-flight requests
/// - Runs `cleanup` (e.g. closing the connection pool) bounded by `shutdown_timeout`
///
/// # Example
/// ```ignore
/// use axum_helpers::server::{close_postgres, create_production_app};
///
/// create_production_app(router, &config.server, config.server.shutdown_timeout, async move {
///     close_postgres(db, "catalog").await;
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (coordinator, _rx) = ShutdownCoordinator::new();
    let shutdown_handle = coordinator.clone();
    let mut server_shutdown = coordinator.subscribe();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let signal_listener = coordinator.clone();
    let signal_task = tokio::spawn(async move { signal_listener.wait_for_signal().await });

    let cleanup_handle = tokio::spawn(async move {
        let mut rx = shutdown_handle.subscribe();
        if !shutdown_handle.is_shutting_down() {
            let _ = rx.recv().await;
        }

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(_) => info!("Cleanup completed successfully"),
            Err(_) => {
                tracing::warn!(
                    "Cleanup exceeded timeout of {:?}, forcing shutdown",
                    shutdown_timeout
                );
            }
        }
    });

    let app = normalize_trailing_slash(router);
    let serve_result = axum::serve(listener, ServiceExt::<axum::extract::Request>::into_make_service(app))
        .with_graceful_shutdown(async move {
            let _ = server_shutdown.recv().await;
        })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // Make sure cleanup runs even if the server stopped on its own
    coordinator.shutdown();
    signal_task.abort();
    cleanup_handle.await.ok();

    serve_result
}

use axum::Router;
use database::postgres::DatabaseConnection;

pub mod health;
pub mod products;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Creates a router with the /ready endpoint that queries the database.
///
/// Merged next to `/health` at the root, outside `/api`.
pub fn ready_router(db: DatabaseConnection) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(db)
}

use axum::Router;

pub mod health;

use domain_items::{ItemService, PgItemRepository};

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// This function takes a reference to AppState and initializes all services.
/// Returns a stateless Router (all sub-routers have state already applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    let repository = PgItemRepository::new(state.db.clone());
    let service = ItemService::new(repository);

    Router::new().nest("/items", domain_items::handlers::router(service))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app
/// router from `create_router`. The /ready endpoint checks the database
/// connection.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

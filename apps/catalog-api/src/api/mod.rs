//! Route composition for the catalog API.

use axum::Router;
use axum_helpers::server::health_router;
use domain_items::{handlers, repository::InMemoryItemRepository, service::ItemService};

/// Build the application routes.
///
/// Constructs the single item repository for the process and injects it
/// into the items router; the repository lives exactly as long as the
/// returned router. Health is mounted alongside so the whole surface is
/// one composable `Router`.
pub fn routes() -> Router {
    let repository = InMemoryItemRepository::new();
    let service = ItemService::new(repository);

    Router::new()
        .nest("/items", handlers::router(service))
        .merge(health_router())
}

//! HTTP route table.

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{handlers, store::SharedStore};

/// Build the application router around an account store.
///
/// # Routes
///
/// - `GET /health`
/// - `GET /`
/// - `GET|POST /accounts`
/// - `GET|PUT|DELETE /accounts/{id}`
///
/// Unknown paths answer 404 and unsupported methods on known paths answer
/// 405, both with the standard JSON error body.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/", get(handlers::health::index))
        .route(
            "/accounts",
            get(handlers::accounts::list_accounts).post(handlers::accounts::create_account),
        )
        .route(
            "/accounts/{id}",
            get(handlers::accounts::get_account)
                .put(handlers::accounts::update_account)
                .delete(handlers::accounts::delete_account),
        )
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        // Request/response spans, verbosity controlled by RUST_LOG
        .layer(TraceLayer::new_for_http())
        // Share the store handle with all handlers via State extraction
        .with_state(store)
}

//! Route definitions for the `/customers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{customer, rental};
use crate::state::AppState;

/// Routes mounted at `/customers`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// GET    /{id}/rentals   -> list_for_customer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(customer::list).post(customer::create))
        .route(
            "/{id}",
            get(customer::get_by_id)
                .put(customer::update)
                .delete(customer::delete),
        )
        .route("/{id}/rentals", get(rental::list_for_customer))
}

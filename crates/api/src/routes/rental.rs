//! Route definitions for the `/rentals` lifecycle endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::rental;
use crate::state::AppState;

/// Routes mounted at `/rentals`.
///
/// ```text
/// POST /check-out  -> check_out
/// POST /check-in   -> check_in
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/check-out", post(rental::check_out))
        .route("/check-in", post(rental::check_in))
}

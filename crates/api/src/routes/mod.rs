pub mod customer;
pub mod health;
pub mod rental;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /customers                   list, create
/// /customers/{id}              get, update, delete
/// /customers/{id}/rentals      open rentals of a customer
/// /videos                      list, create
/// /videos/{id}                 get, update, delete
/// /videos/{id}/rentals         open rentals of a video
/// /rentals/check-out           check out a video
/// /rentals/check-in            check in a video
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/customers", customer::router())
        .nest("/videos", video::router())
        .nest("/rentals", rental::router())
}

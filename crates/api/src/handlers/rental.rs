//! Handlers for the rental lifecycle and the per-entity rental listings.

use axum::extract::{Path, State};
use vidrent_core::error::CoreError;
use vidrent_core::types::DbId;
use vidrent_db::models::rental::{
    CheckInOutcome, CheckOutOutcome, CustomerRental, RentalRequest, VideoRental,
};
use vidrent_db::repositories::{CustomerRepo, RentalRepo, VideoRepo};

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

/// POST /rentals/check-out
pub async fn check_out(
    State(state): State<AppState>,
    Json(input): Json<RentalRequest>,
) -> AppResult<axum::Json<CheckOutOutcome>> {
    let outcome = RentalRepo::check_out(
        &state.pool,
        input.customer_id,
        input.video_id,
        state.config.loan_period_days,
    )
    .await?;
    Ok(axum::Json(outcome))
}

/// POST /rentals/check-in
pub async fn check_in(
    State(state): State<AppState>,
    Json(input): Json<RentalRequest>,
) -> AppResult<axum::Json<CheckInOutcome>> {
    let outcome = RentalRepo::check_in(&state.pool, input.customer_id, input.video_id).await?;
    Ok(axum::Json(outcome))
}

/// GET /customers/{id}/rentals
pub async fn list_for_customer(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<axum::Json<Vec<CustomerRental>>> {
    if CustomerRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }));
    }
    let rentals = RentalRepo::list_for_customer(&state.pool, id).await?;
    Ok(axum::Json(rentals))
}

/// GET /videos/{id}/rentals
pub async fn list_for_video(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<axum::Json<Vec<VideoRental>>> {
    if VideoRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound { entity: "Video", id }));
    }
    let rentals = RentalRepo::list_for_video(&state.pool, id).await?;
    Ok(axum::Json(rentals))
}

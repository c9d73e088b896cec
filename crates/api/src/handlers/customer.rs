//! Handlers for the `/customers` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use vidrent_core::error::CoreError;
use vidrent_core::types::DbId;
use vidrent_db::models::customer::{CreateCustomer, Customer, UpdateCustomer};
use vidrent_db::repositories::CustomerRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::response::IdResponse;
use crate::state::AppState;

/// Query parameters for `GET /customers`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub name: Option<String>,
}

/// POST /customers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCustomer>,
) -> AppResult<(StatusCode, axum::Json<IdResponse>)> {
    let customer = CustomerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, axum::Json(IdResponse { id: customer.id })))
}

/// GET /customers
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<axum::Json<Vec<Customer>>> {
    let customers = CustomerRepo::list(&state.pool, params.name.as_deref()).await?;
    Ok(axum::Json(customers))
}

/// GET /customers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<axum::Json<Customer>> {
    let customer = CustomerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    Ok(axum::Json(customer))
}

/// PUT /customers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCustomer>,
) -> AppResult<axum::Json<Customer>> {
    let customer = CustomerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    Ok(axum::Json(customer))
}

/// DELETE /customers/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<axum::Json<IdResponse>> {
    let deleted = CustomerRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(axum::Json(IdResponse { id }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))
    }
}

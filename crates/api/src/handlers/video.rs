//! Handlers for the `/videos` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use vidrent_core::error::CoreError;
use vidrent_core::types::DbId;
use vidrent_db::models::video::{CreateVideo, UpdateVideo, Video};
use vidrent_db::repositories::VideoRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::response::IdResponse;
use crate::state::AppState;

/// Query parameters for `GET /videos`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub title: Option<String>,
}

/// POST /videos
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateVideo>,
) -> AppResult<(StatusCode, axum::Json<IdResponse>)> {
    let video = VideoRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, axum::Json(IdResponse { id: video.id })))
}

/// GET /videos
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<axum::Json<Vec<Video>>> {
    let videos = VideoRepo::list(&state.pool, params.title.as_deref()).await?;
    Ok(axum::Json(videos))
}

/// GET /videos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<axum::Json<Video>> {
    let video = VideoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Video", id }))?;
    Ok(axum::Json(video))
}

/// PUT /videos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVideo>,
) -> AppResult<axum::Json<Video>> {
    let video = VideoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Video", id }))?;
    Ok(axum::Json(video))
}

/// DELETE /videos/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<axum::Json<IdResponse>> {
    let deleted = VideoRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(axum::Json(IdResponse { id }))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Video", id }))
    }
}

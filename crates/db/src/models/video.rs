//! Video entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vidrent_core::types::{DbId, Timestamp};

/// A video row, enriched with its derived available inventory.
///
/// `available_inventory = total_inventory - count(open rentals)`, computed
/// by the repository query rather than stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub title: String,
    pub release_date: Option<Timestamp>,
    pub total_inventory: i32,
    pub available_inventory: i32,
}

/// DTO for creating a new video. `release_date` is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVideo {
    pub title: String,
    #[serde(default)]
    pub release_date: Option<Timestamp>,
    pub total_inventory: i32,
}

/// DTO for replacing a video via PUT. Full-replace: all fields required
/// except the nullable `release_date`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateVideo {
    pub title: String,
    #[serde(default)]
    pub release_date: Option<Timestamp>,
    pub total_inventory: i32,
}

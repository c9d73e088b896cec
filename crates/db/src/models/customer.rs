//! Customer entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vidrent_core::types::{DbId, Timestamp};

/// A customer row, enriched with its derived open-rental count.
///
/// `videos_checked_out_count` is never stored; the repository computes it
/// with a LEFT JOIN against open rentals.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub name: String,
    pub postal_code: String,
    pub phone: String,
    pub registered_at: Timestamp,
    pub videos_checked_out_count: i64,
}

/// DTO for creating a new customer. All fields required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomer {
    pub name: String,
    pub postal_code: String,
    pub phone: String,
}

/// DTO for replacing a customer via PUT. Full-replace: all fields required.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCustomer {
    pub name: String,
    pub postal_code: String,
    pub phone: String,
}

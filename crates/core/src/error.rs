use crate::types::DbId;

/// Domain-level error taxonomy shared by the db and api crates.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("No available inventory for video {video_id}")]
    InventoryExhausted { video_id: DbId },

    #[error("No open rental for customer {customer_id} and video {video_id}")]
    RentalNotFound { customer_id: DbId, video_id: DbId },

    #[error("Internal error: {0}")]
    Internal(String),
}

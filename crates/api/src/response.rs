//! Shared response types for API handlers.

use serde::Serialize;
use vidrent_core::types::DbId;

/// `{ "id": ... }` payload returned by create and delete endpoints.
#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: DbId,
}

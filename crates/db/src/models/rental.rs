//! Rental entity model, lifecycle DTOs, and listing projections.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use vidrent_core::rental::RentalStatus;
use vidrent_core::types::{DbId, Timestamp};

/// A rental row from the `rentals` table. Open while `returned_at` is NULL.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rental {
    pub id: DbId,
    pub customer_id: DbId,
    pub video_id: DbId,
    pub checked_out_at: Timestamp,
    pub due_date: Timestamp,
    pub returned_at: Option<Timestamp>,
}

impl Rental {
    pub fn status(&self) -> RentalStatus {
        RentalStatus::from_returned_at(self.returned_at)
    }
}

/// DTO for check-out and check-in requests.
///
/// Ids arrive as JSON numbers or numeric strings (clients of the original
/// API sent both); anything else is a deserialization error and surfaces
/// as a 400.
#[derive(Debug, Clone, Deserialize)]
pub struct RentalRequest {
    #[serde(deserialize_with = "coercible_id")]
    pub customer_id: DbId,
    #[serde(deserialize_with = "coercible_id")]
    pub video_id: DbId,
}

/// Outcome of a successful check-out, with post-insert derived counts.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutOutcome {
    pub customer_id: DbId,
    pub video_id: DbId,
    pub due_date: Timestamp,
    pub videos_checked_out_count: i64,
    pub available_inventory: i32,
}

/// Outcome of a successful check-in, with post-close derived counts.
#[derive(Debug, Clone, Serialize)]
pub struct CheckInOutcome {
    pub customer_id: DbId,
    pub video_id: DbId,
    pub videos_checked_out_count: i64,
    pub available_inventory: i32,
}

/// Open rental of a customer, joined with the video it references.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CustomerRental {
    pub title: String,
    pub release_date: Option<Timestamp>,
    pub due_date: Timestamp,
}

/// Open rental of a video, joined with the customer holding it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoRental {
    pub name: String,
    pub phone: String,
    pub postal_code: String,
    pub due_date: Timestamp,
}

/// Accept an id as either a JSON integer or a numeric string.
fn coercible_id<'de, D>(deserializer: D) -> Result<DbId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Int(i64),
        Str(String),
    }

    match IdRepr::deserialize(deserializer)? {
        IdRepr::Int(id) => Ok(id),
        IdRepr::Str(s) => s
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("id '{s}' must be an integer"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rental_request_accepts_integer_ids() {
        let req: RentalRequest =
            serde_json::from_str(r#"{"customer_id": 1, "video_id": 2}"#).unwrap();
        assert_eq!(req.customer_id, 1);
        assert_eq!(req.video_id, 2);
    }

    #[test]
    fn rental_request_coerces_string_ids() {
        let req: RentalRequest =
            serde_json::from_str(r#"{"customer_id": "3", "video_id": "4"}"#).unwrap();
        assert_eq!(req.customer_id, 3);
        assert_eq!(req.video_id, 4);
    }

    #[test]
    fn rental_request_rejects_non_numeric_ids() {
        let result: Result<RentalRequest, _> =
            serde_json::from_str(r#"{"customer_id": "abc", "video_id": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rental_status_follows_returned_at() {
        let mut rental = Rental {
            id: 1,
            customer_id: 1,
            video_id: 1,
            checked_out_at: chrono::Utc::now(),
            due_date: chrono::Utc::now(),
            returned_at: None,
        };
        assert_eq!(rental.status(), RentalStatus::Open);

        rental.returned_at = Some(chrono::Utc::now());
        assert_eq!(rental.status(), RentalStatus::Closed);
    }
}

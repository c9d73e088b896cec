//! Rental-lifecycle rules: loan period, due dates, and availability
//! arithmetic.
//!
//! The repository layer reads and writes rental rows; the decisions about
//! what those rows mean (when a loan falls due, how many copies are left,
//! whether a rental is still open) are made here so they can be unit-tested
//! without a database.

use chrono::Duration;

use crate::types::Timestamp;

/// Loan period applied when `LOAN_PERIOD_DAYS` is not configured.
pub const DEFAULT_LOAN_PERIOD_DAYS: i32 = 7;

// ---------------------------------------------------------------------------
// Rental status
// ---------------------------------------------------------------------------

/// Lifecycle state of a rental. `Open -> Closed` is the only transition,
/// performed by check-in; `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalStatus {
    Open,
    Closed,
}

impl RentalStatus {
    /// Derive status from the `returned_at` column: a rental is open while
    /// it has no return timestamp.
    pub fn from_returned_at(returned_at: Option<Timestamp>) -> Self {
        match returned_at {
            None => Self::Open,
            Some(_) => Self::Closed,
        }
    }
}

// ---------------------------------------------------------------------------
// Lifecycle arithmetic
// ---------------------------------------------------------------------------

/// Compute the due date for a loan starting at `checked_out_at`.
pub fn due_date(checked_out_at: Timestamp, loan_period_days: i32) -> Timestamp {
    checked_out_at + Duration::days(i64::from(loan_period_days))
}

/// Copies of a video available for check-out.
///
/// `total_inventory - open_rentals`, clamped at zero. Open rentals can
/// legitimately exceed the total when a PUT shrinks `total_inventory`
/// while copies are out; availability stays at zero until enough copies
/// come back.
pub fn available_inventory(total_inventory: i32, open_rentals: i64) -> i32 {
    (i64::from(total_inventory) - open_rentals).max(0) as i32
}

/// Whether a check-out may proceed against the given counts.
pub fn can_check_out(total_inventory: i32, open_rentals: i64) -> bool {
    available_inventory(total_inventory, open_rentals) > 0
}

//! Pure domain logic for the video rental backend.
//!
//! No I/O lives here: shared ID/timestamp types, the domain error taxonomy,
//! and the rental-lifecycle rules (loan period, due dates, availability
//! arithmetic). The `db` and `api` crates build on top of this.

pub mod error;
pub mod rental;
pub mod types;

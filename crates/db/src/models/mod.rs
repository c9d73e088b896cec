//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//!   (plus derived counts where the query computes them)
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for full-replace PUTs

pub mod customer;
pub mod rental;
pub mod video;

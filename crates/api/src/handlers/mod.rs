//! HTTP handlers, one module per resource.

pub mod customer;
pub mod rental;
pub mod video;

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. The rental repository
//! additionally owns the transactional check-out / check-in lifecycle.

pub mod customer_repo;
pub mod rental_repo;
pub mod video_repo;

pub use customer_repo::CustomerRepo;
pub use rental_repo::RentalRepo;
pub use video_repo::VideoRepo;

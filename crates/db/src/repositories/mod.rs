//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod distillery_repo;
pub mod stats_repo;
pub mod user_repo;
pub mod whisky_repo;

pub use distillery_repo::DistilleryRepo;
pub use stats_repo::StatsRepo;
pub use user_repo::UserRepo;
pub use whisky_repo::WhiskyRepo;

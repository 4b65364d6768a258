//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` input DTO used by create and full-replace update

pub mod distillery;
pub mod stats;
pub mod user;
pub mod whisky;

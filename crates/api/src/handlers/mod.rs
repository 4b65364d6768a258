pub mod auth;
pub mod distillery;
pub mod import;
pub mod index;
pub mod stats;
pub mod upload;
pub mod whisky;

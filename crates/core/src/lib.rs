//! Domain core for the whisky catalog.
//!
//! No database or HTTP dependencies live here. The bulk importer talks to
//! storage only through the [`import::CatalogStore`] trait so that it can be
//! exercised against an in-memory store in tests.

pub mod error;
pub mod import;
pub mod roles;
pub mod types;

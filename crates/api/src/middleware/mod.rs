//! Request extractors that guard handlers.
//!
//! - [`admin::AdminUser`] -- Bearer JWT carrying the `admin` role.

pub mod admin;

//! Role names stored in `users.role` and embedded in access tokens.

/// Full catalog administration (CRUD, imports, uploads).
pub const ROLE_ADMIN: &str = "admin";

/// Read-only account. Cannot log in to the admin site.
pub const ROLE_VIEWER: &str = "viewer";

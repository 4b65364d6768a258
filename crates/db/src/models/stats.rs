//! Catalog statistics shown on the admin dashboard.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CatalogStats {
    pub whiskies: i64,
    pub distilleries: i64,
    pub users: i64,
    /// Always 0; tastings are not tracked. Kept for dashboard compatibility.
    pub tastings: i64,
}

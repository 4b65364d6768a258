//! Distillery entity model and DTOs.

use dram_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A distillery row from the `distilleries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Distillery {
    pub id: DbId,
    pub name: String,
    pub country: String,
    pub region: Option<String>,
    pub founded_year: Option<i32>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a distillery or replacing all of its fields.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DistilleryInput {
    #[validate(length(min = 1, max = 200, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "country must not be empty"))]
    pub country: String,
    pub region: Option<String>,
    #[validate(range(min = 1500, max = 2100))]
    pub founded_year: Option<i32>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub website: Option<String>,
}

//! Whisky entity model and DTOs.

use dram_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A whisky row joined with the few distillery columns the catalog shows.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Whisky {
    pub id: DbId,
    pub name: String,
    pub distillery_id: Option<DbId>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub whisky_type: Option<String>,
    pub country: Option<String>,
    pub age: Option<i32>,
    pub abv: Option<f64>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub affiliate_link_1: Option<String>,
    pub merchant_name_1: Option<String>,
    pub affiliate_price_1: Option<f64>,
    pub affiliate_link_2: Option<String>,
    pub merchant_name_2: Option<String>,
    pub affiliate_price_2: Option<f64>,
    pub affiliate_link_3: Option<String>,
    pub merchant_name_3: Option<String>,
    pub affiliate_price_3: Option<f64>,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub distillery_name: Option<String>,
    pub logo_url: Option<String>,
    pub distillery_country: Option<String>,
}

/// Request body for creating a whisky or replacing all of its fields.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct WhiskyInput {
    #[validate(length(min = 1, max = 200, message = "name must not be empty"))]
    pub name: String,
    pub distillery_id: Option<DbId>,
    #[serde(rename = "type")]
    pub whisky_type: Option<String>,
    pub country: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub age: Option<i32>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub abv: Option<f64>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub affiliate_link_1: Option<String>,
    pub merchant_name_1: Option<String>,
    #[validate(range(min = 0.0))]
    pub affiliate_price_1: Option<f64>,
    pub affiliate_link_2: Option<String>,
    pub merchant_name_2: Option<String>,
    #[validate(range(min = 0.0))]
    pub affiliate_price_2: Option<f64>,
    pub affiliate_link_3: Option<String>,
    pub merchant_name_3: Option<String>,
    #[validate(range(min = 0.0))]
    pub affiliate_price_3: Option<f64>,
    /// Defaults to `true` when omitted.
    pub active: Option<bool>,
}

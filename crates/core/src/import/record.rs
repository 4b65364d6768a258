use std::ops::RangeInclusive;

use super::row::ImportRow;
use super::validate::{check_required, RecordKind};
use super::RowError;

/// `type` stored when an import row leaves it blank.
pub const DEFAULT_WHISKY_TYPE: &str = "Single Malt";

/// Number of affiliate link columns (`affiliate_link_1` .. `affiliate_link_3`).
pub const AFFILIATE_SLOTS: usize = 3;

// Same bounds as the CRUD input validation.
const AGE_RANGE: RangeInclusive<i32> = 0..=100;
const ABV_RANGE: RangeInclusive<f64> = 0.0..=100.0;
const PRICE_RANGE: RangeInclusive<f64> = 0.0..=f64::MAX;
const FOUNDED_YEAR_RANGE: RangeInclusive<i32> = 1500..=2100;

/// One merchant offer attached to a whisky.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AffiliateOffer {
    pub link: Option<String>,
    pub merchant_name: Option<String>,
    pub price: Option<f64>,
}

/// A validated whisky row, ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct WhiskyRecord {
    pub name: String,
    pub distillery_name: String,
    pub country: String,
    pub whisky_type: String,
    pub age: Option<i32>,
    pub abv: Option<f64>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub offers: [AffiliateOffer; AFFILIATE_SLOTS],
}

impl WhiskyRecord {
    pub fn from_row(row: &ImportRow) -> Result<Self, RowError> {
        check_required(row, RecordKind::Whisky)?;

        let mut offers: [AffiliateOffer; AFFILIATE_SLOTS] = Default::default();
        for (idx, offer) in offers.iter_mut().enumerate() {
            let slot = idx + 1;
            *offer = AffiliateOffer {
                link: row.owned(&format!("affiliate_link_{slot}")),
                merchant_name: row.owned(&format!("merchant_name_{slot}")),
                price: parse_decimal(row, &format!("affiliate_price_{slot}"), PRICE_RANGE)?,
            };
        }

        Ok(Self {
            name: required(row, "name"),
            distillery_name: required(row, "distillery_name"),
            country: required(row, "country"),
            whisky_type: row
                .owned("type")
                .unwrap_or_else(|| DEFAULT_WHISKY_TYPE.to_string()),
            age: parse_int(row, "age", AGE_RANGE)?,
            abv: parse_percentage(row, "abv", ABV_RANGE)?,
            price: parse_decimal(row, "price", PRICE_RANGE)?,
            description: row.owned("description"),
            photo: row.owned("photo"),
            offers,
        })
    }
}

/// A validated distillery row, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistilleryRecord {
    pub name: String,
    pub country: String,
    pub region: Option<String>,
    pub founded_year: Option<i32>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub website: Option<String>,
}

impl DistilleryRecord {
    pub fn from_row(row: &ImportRow) -> Result<Self, RowError> {
        check_required(row, RecordKind::Distillery)?;

        Ok(Self {
            name: required(row, "name"),
            country: required(row, "country"),
            region: row.owned("region"),
            founded_year: parse_int(row, "founded_year", FOUNDED_YEAR_RANGE)?,
            description: row.owned("description"),
            logo_url: row.owned("logo_url"),
            website: row.owned("website"),
        })
    }

    /// A distillery known only by name and country (created from a whisky row).
    pub fn named(name: &str, country: &str) -> Self {
        Self {
            name: name.to_string(),
            country: country.to_string(),
            region: None,
            founded_year: None,
            description: None,
            logo_url: None,
            website: None,
        }
    }
}

// Only called after `check_required`.
fn required(row: &ImportRow, column: &str) -> String {
    row.owned(column).unwrap_or_default()
}

fn invalid(column: &str, raw: &str) -> RowError {
    RowError::InvalidValue {
        column: column.to_string(),
        raw: raw.to_string(),
    }
}

fn parse_int(
    row: &ImportRow,
    column: &str,
    bounds: RangeInclusive<i32>,
) -> Result<Option<i32>, RowError> {
    row.value(column)
        .map(|raw| {
            raw.parse::<i32>()
                .ok()
                .filter(|v| bounds.contains(v))
                .ok_or_else(|| invalid(column, raw))
        })
        .transpose()
}

/// Accepts `.` or `,` as decimal separator. Rejects NaN, infinities and
/// values outside `bounds`.
fn parse_decimal(
    row: &ImportRow,
    column: &str,
    bounds: RangeInclusive<f64>,
) -> Result<Option<f64>, RowError> {
    row.value(column)
        .map(|raw| {
            decimal(raw)
                .filter(|v| bounds.contains(v))
                .ok_or_else(|| invalid(column, raw))
        })
        .transpose()
}

/// Like [`parse_decimal`] but tolerates a trailing `%` (`"46%"`).
fn parse_percentage(
    row: &ImportRow,
    column: &str,
    bounds: RangeInclusive<f64>,
) -> Result<Option<f64>, RowError> {
    row.value(column)
        .map(|raw| {
            decimal(raw.trim_end_matches('%').trim_end())
                .filter(|v| bounds.contains(v))
                .ok_or_else(|| invalid(column, raw))
        })
        .transpose()
}

fn decimal(raw: &str) -> Option<f64> {
    raw.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

//! Postgres-backed [`CatalogStore`] for the bulk importer.

use async_trait::async_trait;
use dram_core::import::{CatalogStore, DistilleryRecord, StoreError, WhiskyRecord};
use dram_core::types::DbId;

use crate::models::distillery::DistilleryInput;
use crate::models::whisky::WhiskyInput;
use crate::repositories::{DistilleryRepo, WhiskyRepo};
use crate::DbPool;

/// PostgreSQL unique-violation SQLSTATE.
const UNIQUE_VIOLATION: &str = "23505";

/// Importer storage over the shared connection pool.
///
/// Each call is its own round trip; nothing wraps the batch in a transaction.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn store_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return StoreError::UniqueViolation {
                constraint: db_err.constraint().unwrap_or("unknown").to_string(),
            };
        }
        tracing::warn!(error = %db_err, "Database error during import");
        return StoreError::Backend(db_err.message().to_string());
    }
    tracing::warn!(error = %err, "Database error during import");
    StoreError::Backend(err.to_string())
}

impl From<&DistilleryRecord> for DistilleryInput {
    fn from(record: &DistilleryRecord) -> Self {
        Self {
            name: record.name.clone(),
            country: record.country.clone(),
            region: record.region.clone(),
            founded_year: record.founded_year,
            description: record.description.clone(),
            logo_url: record.logo_url.clone(),
            website: record.website.clone(),
        }
    }
}

fn whisky_input(record: &WhiskyRecord, distillery_id: DbId) -> WhiskyInput {
    let [o1, o2, o3] = &record.offers;
    WhiskyInput {
        name: record.name.clone(),
        distillery_id: Some(distillery_id),
        whisky_type: Some(record.whisky_type.clone()),
        country: Some(record.country.clone()),
        age: record.age,
        abv: record.abv,
        price: record.price,
        description: record.description.clone(),
        photo: record.photo.clone(),
        affiliate_link_1: o1.link.clone(),
        merchant_name_1: o1.merchant_name.clone(),
        affiliate_price_1: o1.price,
        affiliate_link_2: o2.link.clone(),
        merchant_name_2: o2.merchant_name.clone(),
        affiliate_price_2: o2.price,
        affiliate_link_3: o3.link.clone(),
        merchant_name_3: o3.merchant_name.clone(),
        affiliate_price_3: o3.price,
        active: Some(true),
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn find_distillery_id(&self, name: &str) -> Result<Option<DbId>, StoreError> {
        DistilleryRepo::find_id_by_name(&self.pool, name)
            .await
            .map_err(store_error)
    }

    async fn insert_distillery(&self, record: &DistilleryRecord) -> Result<DbId, StoreError> {
        DistilleryRepo::create(&self.pool, &DistilleryInput::from(record))
            .await
            .map(|d| d.id)
            .map_err(store_error)
    }

    async fn update_distillery_details(
        &self,
        id: DbId,
        record: &DistilleryRecord,
    ) -> Result<u64, StoreError> {
        DistilleryRepo::update_details(&self.pool, id, &DistilleryInput::from(record))
            .await
            .map_err(store_error)
    }

    async fn whisky_exists(&self, name: &str, distillery_id: DbId) -> Result<bool, StoreError> {
        WhiskyRepo::exists_for_distillery(&self.pool, name, distillery_id)
            .await
            .map_err(store_error)
    }

    async fn insert_whisky(
        &self,
        record: &WhiskyRecord,
        distillery_id: DbId,
    ) -> Result<DbId, StoreError> {
        WhiskyRepo::create(&self.pool, &whisky_input(record, distillery_id))
            .await
            .map_err(store_error)
    }
}

use async_trait::async_trait;

use super::record::{DistilleryRecord, WhiskyRecord};
use crate::types::DbId;

/// Storage failure surfaced to the importer.
///
/// Unique violations are kept apart so the importer can treat them as
/// "someone else inserted this first" rather than as a hard row failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("duplicate value violates unique constraint {constraint}")]
    UniqueViolation { constraint: String },

    #[error("{0}")]
    Backend(String),
}

/// Persistence operations needed by the bulk importer.
///
/// Names are compared exactly; callers pass already-trimmed values.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Id of the distillery whose name equals `name`, if any.
    async fn find_distillery_id(&self, name: &str) -> Result<Option<DbId>, StoreError>;

    async fn insert_distillery(&self, record: &DistilleryRecord) -> Result<DbId, StoreError>;

    /// Overwrite region, founded year, description, logo and website.
    /// Returns the number of rows affected.
    async fn update_distillery_details(
        &self,
        id: DbId,
        record: &DistilleryRecord,
    ) -> Result<u64, StoreError>;

    async fn whisky_exists(&self, name: &str, distillery_id: DbId) -> Result<bool, StoreError>;

    /// Insert an active whisky attached to `distillery_id`.
    async fn insert_whisky(
        &self,
        record: &WhiskyRecord,
        distillery_id: DbId,
    ) -> Result<DbId, StoreError>;
}

//! Aggregate counts across catalog tables.

use sqlx::PgPool;

use crate::models::stats::CatalogStats;

pub struct StatsRepo;

impl StatsRepo {
    pub async fn counts(pool: &PgPool) -> Result<CatalogStats, sqlx::Error> {
        sqlx::query_as::<_, CatalogStats>(
            "SELECT
                (SELECT COUNT(*) FROM whiskies) AS whiskies,
                (SELECT COUNT(*) FROM distilleries) AS distilleries,
                (SELECT COUNT(*) FROM users) AS users,
                0::BIGINT AS tastings",
        )
        .fetch_one(pool)
        .await
    }
}

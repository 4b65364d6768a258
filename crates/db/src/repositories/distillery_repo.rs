//! Repository for the `distilleries` table.

use dram_core::types::DbId;
use sqlx::PgPool;

use crate::models::distillery::{Distillery, DistilleryInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, country, region, founded_year, description, logo_url, website, \
                       created_at, updated_at";

/// Provides CRUD operations for distilleries.
pub struct DistilleryRepo;

impl DistilleryRepo {
    /// Insert a new distillery, returning the created row.
    pub async fn create(pool: &PgPool, input: &DistilleryInput) -> Result<Distillery, sqlx::Error> {
        let query = format!(
            "INSERT INTO distilleries (name, country, region, founded_year, description, logo_url, website)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Distillery>(&query)
            .bind(&input.name)
            .bind(&input.country)
            .bind(&input.region)
            .bind(input.founded_year)
            .bind(&input.description)
            .bind(&input.logo_url)
            .bind(&input.website)
            .fetch_one(pool)
            .await
    }

    /// Find a distillery by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Distillery>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM distilleries WHERE id = $1");
        sqlx::query_as::<_, Distillery>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Id of the distillery whose name matches exactly (case-sensitive).
    pub async fn find_id_by_name(pool: &PgPool, name: &str) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM distilleries WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all distilleries ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Distillery>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM distilleries ORDER BY name ASC");
        sqlx::query_as::<_, Distillery>(&query).fetch_all(pool).await
    }

    /// Replace every column of a distillery.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &DistilleryInput,
    ) -> Result<Option<Distillery>, sqlx::Error> {
        let query = format!(
            "UPDATE distilleries SET
                name = $2,
                country = $3,
                region = $4,
                founded_year = $5,
                description = $6,
                logo_url = $7,
                website = $8,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Distillery>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.country)
            .bind(&input.region)
            .bind(input.founded_year)
            .bind(&input.description)
            .bind(&input.logo_url)
            .bind(&input.website)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the optional details of a distillery, leaving name and
    /// country alone. Blank values become `NULL`.
    ///
    /// Returns the number of rows affected.
    pub async fn update_details(
        pool: &PgPool,
        id: DbId,
        input: &DistilleryInput,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE distilleries SET
                region = $2,
                founded_year = $3,
                description = $4,
                logo_url = $5,
                website = $6,
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.region)
        .bind(input.founded_year)
        .bind(&input.description)
        .bind(&input.logo_url)
        .bind(&input.website)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Permanently delete a distillery. Whiskies keep existing with a
    /// `NULL` distillery. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM distilleries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

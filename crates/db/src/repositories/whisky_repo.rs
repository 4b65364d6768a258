//! Repository for the `whiskies` table.

use dram_core::types::DbId;
use sqlx::PgPool;

use crate::models::whisky::{Whisky, WhiskyInput};

/// Select list for [`Whisky`], expects `whiskies w LEFT JOIN distilleries d`.
const JOINED_COLUMNS: &str = "w.id, w.name, w.distillery_id, w.type, w.country, w.age, w.abv, \
     w.price, w.description, w.photo, \
     w.affiliate_link_1, w.merchant_name_1, w.affiliate_price_1, \
     w.affiliate_link_2, w.merchant_name_2, w.affiliate_price_2, \
     w.affiliate_link_3, w.merchant_name_3, w.affiliate_price_3, \
     w.active, w.created_at, w.updated_at, \
     d.name AS distillery_name, d.logo_url, d.country AS distillery_country";

/// Provides CRUD operations for whiskies.
pub struct WhiskyRepo;

impl WhiskyRepo {
    /// Insert a new whisky and return its id.
    ///
    /// `active` defaults to `true` when not supplied.
    pub async fn create(pool: &PgPool, input: &WhiskyInput) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO whiskies
                (name, distillery_id, type, country, age, abv, price, description, photo,
                 affiliate_link_1, merchant_name_1, affiliate_price_1,
                 affiliate_link_2, merchant_name_2, affiliate_price_2,
                 affiliate_link_3, merchant_name_3, affiliate_price_3,
                 active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18,
                     COALESCE($19, TRUE))
             RETURNING id",
        )
        .bind(&input.name)
        .bind(input.distillery_id)
        .bind(&input.whisky_type)
        .bind(&input.country)
        .bind(input.age)
        .bind(input.abv)
        .bind(input.price)
        .bind(&input.description)
        .bind(&input.photo)
        .bind(&input.affiliate_link_1)
        .bind(&input.merchant_name_1)
        .bind(input.affiliate_price_1)
        .bind(&input.affiliate_link_2)
        .bind(&input.merchant_name_2)
        .bind(input.affiliate_price_2)
        .bind(&input.affiliate_link_3)
        .bind(&input.merchant_name_3)
        .bind(input.affiliate_price_3)
        .bind(input.active)
        .fetch_one(pool)
        .await
    }

    /// Find a whisky by id, active or not.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Whisky>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM whiskies w
             LEFT JOIN distilleries d ON w.distillery_id = d.id
             WHERE w.id = $1"
        );
        sqlx::query_as::<_, Whisky>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active whiskies ordered by name.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Whisky>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM whiskies w
             LEFT JOIN distilleries d ON w.distillery_id = d.id
             WHERE w.active = TRUE
             ORDER BY w.name ASC"
        );
        sqlx::query_as::<_, Whisky>(&query).fetch_all(pool).await
    }

    /// Whether a whisky named exactly `name` exists for the distillery.
    pub async fn exists_for_distillery(
        pool: &PgPool,
        name: &str,
        distillery_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM whiskies WHERE name = $1 AND distillery_id = $2)",
        )
        .bind(name)
        .bind(distillery_id)
        .fetch_one(pool)
        .await
    }

    /// Replace every column of a whisky. Returns `true` if a row was updated.
    pub async fn update(pool: &PgPool, id: DbId, input: &WhiskyInput) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE whiskies SET
                name = $2,
                distillery_id = $3,
                type = $4,
                country = $5,
                age = $6,
                abv = $7,
                price = $8,
                description = $9,
                photo = $10,
                affiliate_link_1 = $11,
                merchant_name_1 = $12,
                affiliate_price_1 = $13,
                affiliate_link_2 = $14,
                merchant_name_2 = $15,
                affiliate_price_2 = $16,
                affiliate_link_3 = $17,
                merchant_name_3 = $18,
                affiliate_price_3 = $19,
                active = COALESCE($20, TRUE),
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.distillery_id)
        .bind(&input.whisky_type)
        .bind(&input.country)
        .bind(input.age)
        .bind(input.abv)
        .bind(input.price)
        .bind(&input.description)
        .bind(&input.photo)
        .bind(&input.affiliate_link_1)
        .bind(&input.merchant_name_1)
        .bind(input.affiliate_price_1)
        .bind(&input.affiliate_link_2)
        .bind(&input.merchant_name_2)
        .bind(input.affiliate_price_2)
        .bind(&input.affiliate_link_3)
        .bind(&input.merchant_name_3)
        .bind(input.affiliate_price_3)
        .bind(input.active)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a whisky. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM whiskies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

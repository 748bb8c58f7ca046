//! Subject repository for catalog records.
//!
//! Queries are checked at runtime (`query_as` + `FromRow`) so the crate builds
//! without a live database.

use eduskills_core::{CatalogEntry, SubjectId};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::RepositoryError;
use crate::catalog::CatalogStore;

/// A row of the `subjects` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SubjectRecord {
    pub id: SubjectId,
    /// Discipline name shown on the page.
    pub discipline: String,
    /// Unit price in whole rubles.
    pub cost: i32,
    pub package_size: i32,
    /// Package discount in percent ("Скидка %").
    pub discount_percent: Option<i32>,
}

impl From<SubjectRecord> for CatalogEntry {
    fn from(record: SubjectRecord) -> Self {
        Self {
            name: record.discipline,
            unit_price: i64::from(record.cost),
            package_size: i64::from(record.package_size),
            discount_percent: record.discount_percent,
        }
    }
}

/// Repository for subject database operations.
pub struct SubjectRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SubjectRepository<'a> {
    /// Create a new subject repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a subject by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: SubjectId) -> Result<Option<SubjectRecord>, RepositoryError> {
        let record = sqlx::query_as::<_, SubjectRecord>(
            r"
            SELECT id, discipline, cost, package_size, discount_percent
            FROM subjects
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(record)
    }

    /// List all subjects ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<SubjectRecord>, RepositoryError> {
        let records = sqlx::query_as::<_, SubjectRecord>(
            r"
            SELECT id, discipline, cost, package_size, discount_percent
            FROM subjects
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }

    /// Insert a subject, or overwrite every field of the existing row with the same ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn upsert(&self, record: &SubjectRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO subjects (id, discipline, cost, package_size, discount_percent)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET discipline = EXCLUDED.discipline,
                cost = EXCLUDED.cost,
                package_size = EXCLUDED.package_size,
                discount_percent = EXCLUDED.discount_percent
            ",
        )
        .bind(record.id)
        .bind(&record.discipline)
        .bind(record.cost)
        .bind(record.package_size)
        .bind(record.discount_percent)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}

impl CatalogStore for SubjectRepository<'_> {
    async fn get_entry(&self, id: SubjectId) -> Result<CatalogEntry, RepositoryError> {
        self.get_by_id(id)
            .await?
            .map(CatalogEntry::from)
            .ok_or_else(|| RepositoryError::NotFound(format!("subject {id}")))
    }
}

//! Refill repository implementation
//!
//! Amounts are stored as integer cents and quantities as integer
//! millilitres, so the aggregate queries below sum exactly in SQL.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::SqlitePool;

use crate::error::DatabaseError;

/// Database row representation of a refill
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct RefillRow {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub amount_cents: i64,
    pub quantity_ml: i64,
    pub comment: Option<String>,
    pub operation_number: Option<i64>,
    pub client_id: i64,
    pub plate_id: i64,
}

/// Data for inserting a refill
#[derive(Debug, Clone)]
pub struct NewRefillRow {
    pub date: DateTime<Utc>,
    pub amount_cents: i64,
    pub quantity_ml: i64,
    pub comment: Option<String>,
    pub operation_number: Option<i64>,
    pub client_id: i64,
    pub plate_id: i64,
}

/// Summed refill columns for one client
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct RefillTotalsRow {
    pub quantity_ml: i64,
    pub amount_cents: i64,
    pub refill_count: i64,
}

/// Amount summed per plate number
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PlateSpendRow {
    pub number: String,
    pub total_cents: i64,
}

const REFILL_COLUMNS: &str = "id, date, amount_cents, quantity_ml, comment, operation_number, client_id, plate_id";

/// Repository for the `refills` table
#[derive(Debug, Clone)]
pub struct RefillRepository {
    pool: SqlitePool,
}

impl RefillRepository {
    /// Creates a new RefillRepository with the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Lists every refill, most recent first
    pub async fn list(&self) -> Result<Vec<RefillRow>, DatabaseError> {
        let sql = format!("SELECT {REFILL_COLUMNS} FROM refills ORDER BY date DESC, id DESC");
        let rows = sqlx::query_as::<_, RefillRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Inserts a refill and returns its id
    pub async fn insert(&self, refill: &NewRefillRow) -> Result<i64, DatabaseError> {
        let result = sqlx::query(
            r#"
            INSERT INTO refills (
                date, amount_cents, quantity_ml, comment,
                operation_number, client_id, plate_id
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(encode_date(&refill.date))
        .bind(refill.amount_cents)
        .bind(refill.quantity_ml)
        .bind(&refill.comment)
        .bind(refill.operation_number)
        .bind(refill.client_id)
        .bind(refill.plate_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn delete(&self, id: i64) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM refills WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Sums quantity and amount over a client's refills
    ///
    /// Both sums are zero when the client has no refills.
    pub async fn totals_for_client(&self, client_id: i64) -> Result<RefillTotalsRow, DatabaseError> {
        let row = sqlx::query_as::<_, RefillTotalsRow>(
            r#"
            SELECT
                COALESCE(SUM(quantity_ml), 0) AS quantity_ml,
                COALESCE(SUM(amount_cents), 0) AS amount_cents,
                COUNT(*) AS refill_count
            FROM refills
            WHERE client_id = ?
            "#,
        )
        .bind(client_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// The refill of a client with the latest date
    pub async fn last_for_client(&self, client_id: i64) -> Result<Option<RefillRow>, DatabaseError> {
        let sql = format!(
            "SELECT {REFILL_COLUMNS} FROM refills WHERE client_id = ? ORDER BY date DESC, id DESC LIMIT 1"
        );
        let row = sqlx::query_as::<_, RefillRow>(&sql)
            .bind(client_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Amount summed per plate number for a client's refills
    ///
    /// Groups come back in plate-number order and are cut at `limit`; they
    /// are not ranked by the sum. Refills whose plate no longer exists are
    /// left out by the join.
    pub async fn spend_by_plate(
        &self,
        client_id: i64,
        limit: u32,
    ) -> Result<Vec<PlateSpendRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, PlateSpendRow>(
            r#"
            SELECT p.number AS number, SUM(r.amount_cents) AS total_cents
            FROM refills r
            INNER JOIN plates p ON p.id = r.plate_id
            WHERE r.client_id = ?
            GROUP BY p.number
            ORDER BY p.number
            LIMIT ?
            "#,
        )
        .bind(client_id)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

/// Fixed-width UTC text so `ORDER BY date` is chronological
pub fn encode_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_encode_date_is_fixed_width() {
        let a = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let b = a + chrono::Duration::milliseconds(250);

        assert_eq!(encode_date(&a), "2024-01-02T03:04:05.000Z");
        assert_eq!(encode_date(&b), "2024-01-02T03:04:05.250Z");
        assert!(encode_date(&a) < encode_date(&b));
    }
}

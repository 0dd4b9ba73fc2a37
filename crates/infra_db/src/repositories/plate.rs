//! Plate repository implementation

use sqlx::SqlitePool;

use crate::error::DatabaseError;

/// Database row representation of a plate
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PlateRow {
    pub id: i64,
    pub number: String,
    pub client_id: i64,
}

/// Data for inserting or updating a plate; `number` is already normalized
#[derive(Debug, Clone)]
pub struct NewPlate {
    pub number: String,
    pub client_id: i64,
}

/// Repository for the `plates` table
#[derive(Debug, Clone)]
pub struct PlateRepository {
    pool: SqlitePool,
}

impl PlateRepository {
    /// Creates a new PlateRepository with the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<PlateRow>, DatabaseError> {
        let row = sqlx::query_as::<_, PlateRow>(
            "SELECT id, number, client_id FROM plates WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Finds a plate by exact number
    pub async fn find_by_number(&self, number: &str) -> Result<Option<PlateRow>, DatabaseError> {
        let row = sqlx::query_as::<_, PlateRow>(
            "SELECT id, number, client_id FROM plates WHERE number = ?",
        )
        .bind(number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Lists every plate ordered by number
    pub async fn list(&self) -> Result<Vec<PlateRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, PlateRow>(
            "SELECT id, number, client_id FROM plates ORDER BY number",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Lists the plates of one client ordered by number
    pub async fn list_for_client(&self, client_id: i64) -> Result<Vec<PlateRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, PlateRow>(
            "SELECT id, number, client_id FROM plates WHERE client_id = ? ORDER BY number",
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Inserts a plate and returns its id
    ///
    /// # Errors
    ///
    /// `DatabaseError::DuplicateEntry` if the number is taken
    pub async fn insert(&self, plate: &NewPlate) -> Result<i64, DatabaseError> {
        let result = sqlx::query("INSERT INTO plates (number, client_id) VALUES (?, ?)")
            .bind(&plate.number)
            .bind(plate.client_id)
            .execute(&self.pool)
            .await
            .map_err(|e| duplicate_number(e, &plate.number))?;

        Ok(result.last_insert_rowid())
    }

    /// Updates a plate in place
    ///
    /// # Returns
    ///
    /// `true` if a row was updated
    pub async fn update(&self, id: i64, plate: &NewPlate) -> Result<bool, DatabaseError> {
        let result = sqlx::query("UPDATE plates SET number = ?, client_id = ? WHERE id = ?")
            .bind(&plate.number)
            .bind(plate.client_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| duplicate_number(e, &plate.number))?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM plates WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn duplicate_number(error: sqlx::Error, number: &str) -> DatabaseError {
    match DatabaseError::from(error) {
        DatabaseError::DuplicateEntry(_) => DatabaseError::duplicate("Plate", "number", number),
        other => other,
    }
}

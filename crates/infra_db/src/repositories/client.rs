//! Client repository implementation

use sqlx::SqlitePool;

use crate::error::DatabaseError;

/// Database row representation of a client
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ClientRow {
    pub id: i64,
    pub name: String,
    pub notes: Option<String>,
}

/// Data for inserting or updating a client
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub notes: Option<String>,
}

/// Repository for the `clients` table
#[derive(Debug, Clone)]
pub struct ClientRepository {
    pool: SqlitePool,
}

impl ClientRepository {
    /// Creates a new ClientRepository with the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Retrieves a client by id
    ///
    /// # Returns
    ///
    /// `None` if no client has that id
    pub async fn find_by_id(&self, id: i64) -> Result<Option<ClientRow>, DatabaseError> {
        let row = sqlx::query_as::<_, ClientRow>(
            "SELECT id, name, notes FROM clients WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Lists every client ordered by name
    pub async fn list(&self) -> Result<Vec<ClientRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, ClientRow>(
            "SELECT id, name, notes FROM clients ORDER BY name, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Finds the first client (lowest id) with exactly this name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<ClientRow>, DatabaseError> {
        let row = sqlx::query_as::<_, ClientRow>(
            "SELECT id, name, notes FROM clients WHERE name = ? ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Finds the first client whose name matches ignoring ASCII case
    ///
    /// Uses SQLite's `LOWER()`, which folds ASCII letters only.
    pub async fn find_by_name_ignore_case(
        &self,
        name: &str,
    ) -> Result<Option<ClientRow>, DatabaseError> {
        let row = sqlx::query_as::<_, ClientRow>(
            "SELECT id, name, notes FROM clients WHERE LOWER(name) = LOWER(?) ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Inserts a client and returns its id
    pub async fn insert(&self, client: &NewClient) -> Result<i64, DatabaseError> {
        let result = sqlx::query("INSERT INTO clients (name, notes) VALUES (?, ?)")
            .bind(&client.name)
            .bind(&client.notes)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Updates a client in place
    ///
    /// # Returns
    ///
    /// `true` if a row was updated
    pub async fn update(&self, id: i64, client: &NewClient) -> Result<bool, DatabaseError> {
        let result = sqlx::query("UPDATE clients SET name = ?, notes = ? WHERE id = ?")
            .bind(&client.name)
            .bind(&client.notes)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a client; plates and refills are not touched
    pub async fn delete(&self, id: i64) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Number of stored clients
    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

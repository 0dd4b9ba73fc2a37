//! Demo data
//!
//! A small fixed data set for local runs: two clients and three plates.
//! Written in one transaction and only into a database with no clients.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DatabaseError;

/// Demo clients as `(name, notes)`
pub const DEMO_CLIENTS: [(&str, &str); 2] = [
    ("Transportes Rápido SL", "Cliente VIP - Pago a 30 días"),
    ("Logística David", "Sin incidencias"),
];

/// Demo plates as `(number, index into DEMO_CLIENTS)`
pub const DEMO_PLATES: [(&str, usize); 3] = [
    ("1234-BBB", 0),
    ("5678-CCC", 0),
    ("9999-ZZZ", 1),
];

/// Inserts the demo data set if the `clients` table is empty
///
/// # Returns
///
/// `true` if the data was inserted, `false` if the database already had
/// clients and nothing was written
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<bool, DatabaseError> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        info!(existing, "Skipping demo seed, clients already present");
        return Ok(false);
    }

    let mut tx = pool.begin().await?;
    let mut client_ids = Vec::with_capacity(DEMO_CLIENTS.len());

    for (name, notes) in DEMO_CLIENTS {
        let result = sqlx::query("INSERT INTO clients (name, notes) VALUES (?, ?)")
            .bind(name)
            .bind(notes)
            .execute(&mut *tx)
            .await?;
        client_ids.push(result.last_insert_rowid());
    }

    for (number, owner) in DEMO_PLATES {
        sqlx::query("INSERT INTO plates (number, client_id) VALUES (?, ?)")
            .bind(number)
            .bind(client_ids[owner])
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    info!(
        clients = DEMO_CLIENTS.len(),
        plates = DEMO_PLATES.len(),
        "Demo data seeded"
    );
    Ok(true)
}

//! Table creation, run once at startup

use sea_orm::{ConnectionTrait, DbErr};
use tracing::info;

/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted row
/// again; `UNIQUE` on name backs the duplicate check.
pub const CREATE_ITEMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        VARCHAR(100) NOT NULL UNIQUE,
    description TEXT NULL,
    created_at  TEXT NOT NULL
)"#;

/// Create the items table if it does not exist yet. Idempotent.
pub async fn create_tables<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    db.execute_unprepared(CREATE_ITEMS_TABLE).await?;
    info!("Items table ready");
    Ok(())
}

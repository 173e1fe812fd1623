use sqlx::SqlitePool;
use tracing::debug;

const CREATE_BANK_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS bank (
        id        INTEGER PRIMARY KEY,
        code      TEXT NOT NULL,
        name      TEXT NOT NULL,
        currency  TEXT NOT NULL,
        url       TEXT NOT NULL,
        create_at TEXT NOT NULL,
        create_by TEXT NOT NULL,
        update_at TEXT NOT NULL,
        update_by TEXT NOT NULL
    )
"#;

// Serves both the range predicate and the ORDER BY of the page queries; the
// expression must stay identical to the one in `bank_sql_repository`.
const CREATE_UPDATE_AT_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_bank_update_instant_id \
     ON bank (unixepoch(update_at, 'subsec'), id)";

/// Creates the `bank` table and its ordering index if they are missing.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_BANK_TABLE).execute(pool).await?;
    sqlx::query(CREATE_UPDATE_AT_INDEX).execute(pool).await?;
    debug!("bank schema ensured");
    Ok(())
}

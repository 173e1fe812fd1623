use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::domain::bank::cursor::{PageCursor, PageDirection};
use crate::domain::bank::error::BankError;

use super::bank_entity::BankEntity;
use super::bank_repository_trait::BankRepository;

// Ordering and comparison go through `unixepoch(.., 'subsec')` so rows written
// as `...Z`, `...+00:00` or `YYYY-MM-DD HH:MM:SS` compare as instants. The
// expression matches `idx_bank_update_instant_id`.
const SELECT_NEXT: &str = r#"
    SELECT id, code, name, currency, url, create_at, create_by, update_at, update_by
    FROM bank
    WHERE unixepoch(update_at, 'subsec') > unixepoch(?, 'subsec')
    ORDER BY unixepoch(update_at, 'subsec') ASC, id ASC
    LIMIT 1
"#;

const SELECT_PREVIOUS: &str = r#"
    SELECT id, code, name, currency, url, create_at, create_by, update_at, update_by
    FROM bank
    WHERE unixepoch(update_at, 'subsec') < unixepoch(?, 'subsec')
    ORDER BY unixepoch(update_at, 'subsec') DESC, id DESC
    LIMIT 1
"#;

const SELECT_NEXT_AFTER_ID: &str = r#"
    SELECT id, code, name, currency, url, create_at, create_by, update_at, update_by
    FROM bank
    WHERE (unixepoch(update_at, 'subsec'), id) > (unixepoch(?, 'subsec'), ?)
    ORDER BY unixepoch(update_at, 'subsec') ASC, id ASC
    LIMIT 1
"#;

const SELECT_PREVIOUS_BEFORE_ID: &str = r#"
    SELECT id, code, name, currency, url, create_at, create_by, update_at, update_by
    FROM bank
    WHERE (unixepoch(update_at, 'subsec'), id) < (unixepoch(?, 'subsec'), ?)
    ORDER BY unixepoch(update_at, 'subsec') DESC, id DESC
    LIMIT 1
"#;

/// `BankRepository` backed by the shared sqlx pool.
#[derive(Clone)]
pub struct BankSqlRepository {
    pool: SqlitePool,
}

impl BankSqlRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch_adjacent(
        &self,
        direction: PageDirection,
        cursor: &PageCursor,
    ) -> Result<BankEntity, BankError> {
        let sql = match (direction, cursor.id) {
            (PageDirection::Next, None) => SELECT_NEXT,
            (PageDirection::Previous, None) => SELECT_PREVIOUS,
            (PageDirection::Next, Some(_)) => SELECT_NEXT_AFTER_ID,
            (PageDirection::Previous, Some(_)) => SELECT_PREVIOUS_BEFORE_ID,
        };

        let mut query = sqlx::query_as::<_, BankEntity>(sql).bind(cursor.update_at);
        if let Some(id) = cursor.id {
            query = query.bind(id);
        }

        debug!(%direction, update_at = %cursor.update_at, id = ?cursor.id, "fetching adjacent bank");

        // The connection is held only for the lifetime of this future.
        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|source| BankError::store(direction, source))?;

        row.ok_or(BankError::NotFound(direction))
    }
}

#[async_trait]
impl BankRepository for BankSqlRepository {
    async fn find_next(&self, cursor: &PageCursor) -> Result<BankEntity, BankError> {
        self.fetch_adjacent(PageDirection::Next, cursor).await
    }

    async fn find_previous(&self, cursor: &PageCursor) -> Result<BankEntity, BankError> {
        self.fetch_adjacent(PageDirection::Previous, cursor).await
    }
}

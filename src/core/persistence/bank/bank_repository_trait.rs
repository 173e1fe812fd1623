use async_trait::async_trait;

use crate::domain::bank::cursor::PageCursor;
use crate::domain::bank::error::BankError;

use super::bank_entity::BankEntity;

/// Single-row adjacency lookups over the `(update_at, id)` ordering.
///
/// Implementations issue one query per call. Dropping the returned future
/// must abandon the query and release whatever connection it holds.
#[async_trait]
pub trait BankRepository: Send + Sync {
    /// Smallest record strictly after `cursor`.
    async fn find_next(&self, cursor: &PageCursor) -> Result<BankEntity, BankError>;

    /// Largest record strictly before `cursor`.
    async fn find_previous(&self, cursor: &PageCursor) -> Result<BankEntity, BankError>;
}

use thiserror::Error;

use super::cursor::PageDirection;

/// Outcome of a failed page lookup. The HTTP layer maps each variant to a
/// status code; nothing in between reinterprets it.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("no {0} page found")]
    NotFound(PageDirection),

    #[error("failed to get {direction} page bank: {source}")]
    Store {
        direction: PageDirection,
        #[source]
        source: sqlx::Error,
    },
}

impl BankError {
    pub fn store(direction: PageDirection, source: sqlx::Error) -> Self {
        BankError::Store { direction, source }
    }
}

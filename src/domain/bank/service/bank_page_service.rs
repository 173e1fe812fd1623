use std::sync::Arc;

use crate::core::persistence::bank::bank_entity::BankEntity;
use crate::core::persistence::bank::bank_repository_trait::BankRepository;
use crate::domain::bank::cursor::PageCursor;
use crate::domain::bank::error::BankError;

/// Cursor pagination over bank records. Holds no session state; every call
/// carries its own cursor.
pub struct BankPageService {
    repo: Arc<dyn BankRepository>,
}

impl BankPageService {
    pub fn new(repo: Arc<dyn BankRepository>) -> Self {
        Self { repo }
    }

    pub async fn next_page(&self, cursor: PageCursor) -> Result<BankEntity, BankError> {
        self.repo.find_next(&cursor).await
    }

    pub async fn previous_page(&self, cursor: PageCursor) -> Result<BankEntity, BankError> {
        self.repo.find_previous(&cursor).await
    }
}

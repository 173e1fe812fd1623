use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

use crate::core::persistence::bank::bank_repository_trait::BankRepository;
use crate::core::persistence::bank::bank_sql_repository::BankSqlRepository;
use crate::domain::bank::service::bank_page_service::BankPageService;

#[derive(Clone)]
pub struct AppState {
    pub bank_service: Arc<BankPageService>,
    pub request_timeout: Duration,
}

pub fn build_app_state(pool: SqlitePool, request_timeout: Duration) -> AppState {
    AppState::with_repository(Arc::new(BankSqlRepository::new(pool)), request_timeout)
}

impl AppState {
    /// Wires the service over any repository; tests pass mocks here.
    pub fn with_repository(repo: Arc<dyn BankRepository>, request_timeout: Duration) -> Self {
        Self {
            bank_service: Arc::new(BankPageService::new(repo)),
            request_timeout,
        }
    }
}

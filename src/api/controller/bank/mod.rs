//! Bank controller: connects pagination routes to the page service

use std::future::Future;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use tracing::warn;

use crate::api::dto::bank_page_query_dto::BankPageQueryDto;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::persistence::bank::bank_entity::BankEntity;
use crate::domain::bank::cursor::PageCursor;
use crate::domain::bank::error::BankError;
use crate::errors::AppError;

pub struct BankController;

impl BankController {
    pub async fn next_page(
        State(state): State<AppState>,
        query: Result<Query<BankPageQueryDto>, QueryRejection>,
    ) -> Result<Json<BankEntity>, AppError> {
        let cursor = parse_cursor(query)?;
        to_json(with_deadline(&state, state.bank_service.next_page(cursor)).await?)
    }

    pub async fn previous_page(
        State(state): State<AppState>,
        query: Result<Query<BankPageQueryDto>, QueryRejection>,
    ) -> Result<Json<BankEntity>, AppError> {
        let cursor = parse_cursor(query)?;
        to_json(with_deadline(&state, state.bank_service.previous_page(cursor)).await?)
    }
}

fn parse_cursor(
    query: Result<Query<BankPageQueryDto>, QueryRejection>,
) -> Result<PageCursor, AppError> {
    let Query(dto) = query.map_err(|rejection| AppError::ValidationError(rejection.body_text()))?;
    dto.into_cursor()
}

/// Bounds the lookup by the request deadline. On expiry the lookup future is
/// dropped, which cancels its store query and returns the connection.
async fn with_deadline<F>(
    state: &AppState,
    lookup: F,
) -> Result<Result<BankEntity, BankError>, AppError>
where
    F: Future<Output = Result<BankEntity, BankError>>,
{
    tokio::time::timeout(state.request_timeout, lookup)
        .await
        .map_err(|_| {
            warn!(
                timeout_ms = state.request_timeout.as_millis() as u64,
                "bank lookup exceeded deadline"
            );
            AppError::Timeout
        })
}

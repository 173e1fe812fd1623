//! Bank pagination query DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::domain::bank::cursor::PageCursor;
use crate::errors::AppError;

pub const INVALID_TIMESTAMP: &str = "invalid timestamp";

#[derive(Deserialize, Debug, Default)]
pub struct BankPageQueryDto {
    /// RFC3339 timestamp of the record the caller is positioned on.
    pub current_update_at: Option<String>,
    /// Optional id of that record, used to step through equal timestamps.
    pub current_id: Option<i64>,
}

impl BankPageQueryDto {
    pub fn into_cursor(self) -> Result<PageCursor, AppError> {
        let raw = self
            .current_update_at
            .ok_or_else(|| AppError::ValidationError(INVALID_TIMESTAMP.into()))?;

        let update_at = DateTime::parse_from_rfc3339(raw.trim())
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(|err| {
                debug!(value = %raw, error = %err, "rejecting current_update_at");
                AppError::ValidationError(INVALID_TIMESTAMP.into())
            })?;

        let cursor = PageCursor::at(update_at);
        Ok(match self.current_id {
            Some(id) => cursor.with_id(id),
            None => cursor,
        })
    }
}

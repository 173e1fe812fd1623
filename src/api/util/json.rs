use axum::Json;
use tracing::{debug, error};

use crate::domain::bank::error::BankError;
use crate::errors::AppError;

/// Map a domain result into `Json<T>`, logging the failure before it turns
/// into a status code.
pub fn to_json<T: serde::Serialize>(result: Result<T, BankError>) -> Result<Json<T>, AppError> {
    match result {
        Ok(value) => Ok(Json(value)),
        Err(err) => {
            match &err {
                BankError::NotFound(direction) => debug!(%direction, "no adjacent bank"),
                BankError::Store { source, .. } => error!(error = %err, cause = ?source, "bank lookup failed"),
            }
            Err(err.into())
        }
    }
}

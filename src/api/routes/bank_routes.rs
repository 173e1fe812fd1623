//! Bank pagination routes (e.g., /banks/*)

use axum::{routing::get, Router};

use crate::api::controller::bank::BankController;
use crate::app_state::AppState;

pub fn bank_routes() -> Router<AppState> {
    Router::new()
        .route("/next", get(BankController::next_page))
        .route("/previous", get(BankController::previous_page))
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use reqwest::StatusCode;
use serde_json::Value;
use sqlx::SqlitePool;
use tokio::net::TcpListener;

use bankpage_core::app_state::{build_app_state, AppState};
use bankpage_core::core::persistence::bank::bank_entity::BankEntity;
use bankpage_core::core::persistence::bank::bank_repository_trait::BankRepository;
use bankpage_core::core::persistence::bank::bank_schema::ensure_schema;
use bankpage_core::core::persistence::db::connect_in_memory;
use bankpage_core::domain::bank::cursor::{PageCursor, PageDirection};
use bankpage_core::domain::bank::error::BankError;
use bankpage_core::routes::app_router;

const TIMEOUT: Duration = Duration::from_secs(5);

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
}

async fn seeded_pool() -> SqlitePool {
    let pool = connect_in_memory().await.unwrap();
    ensure_schema(&pool).await.unwrap();

    for (id, code, currency, d) in [(1, "SCB", "THB", 1), (2, "BBL", "THB", 2), (3, "DBS", "SGD", 3)] {
        sqlx::query(
            "INSERT INTO bank (id, code, name, currency, url, create_at, create_by, update_at, update_by)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id as i64)
        .bind(code)
        .bind(format!("{code} Bank"))
        .bind(currency)
        .bind(format!("https://{}.example", code.to_lowercase()))
        .bind(day(1))
        .bind("seed")
        .bind(day(d))
        .bind("ops")
        .execute(&pool)
        .await
        .unwrap();
    }

    pool
}

async fn spawn_app(state: AppState) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app_router(state)).await.unwrap();
    });

    format!("http://{addr}")
}

async fn get(url: String) -> (StatusCode, Value) {
    let resp = reqwest::get(url).await.unwrap();
    let status = resp.status();
    let body = resp.json::<Value>().await.unwrap();
    (status, body)
}

fn cursor_param(ts: &str) -> String {
    format!("current_update_at={}", urlencoding::encode(ts))
}

#[tokio::test]
async fn next_and_previous_walk_the_table() {
    let base = spawn_app(build_app_state(seeded_pool().await, TIMEOUT)).await;

    let (status, body) = get(format!("{base}/banks/next?{}", cursor_param("2024-01-01T00:00:00Z"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);
    assert_eq!(body["code"], "BBL");
    assert_eq!(body["currency"], "THB");
    assert_eq!(body["url"], "https://bbl.example");
    assert_eq!(body["create_at"], "2024-01-01T00:00:00Z");
    assert_eq!(body["create_by"], "seed");
    assert_eq!(body["update_at"], "2024-01-02T00:00:00Z");
    assert_eq!(body["update_by"], "ops");

    let (status, body) =
        get(format!("{base}/banks/previous?{}", cursor_param("2024-01-03T00:00:00Z"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);

    // Offsets are normalised to UTC before comparison.
    let (status, body) =
        get(format!("{base}/banks/next?{}", cursor_param("2024-01-02T08:00:00+07:00"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 3);
}

#[tokio::test]
async fn walking_off_the_end_is_not_found() {
    let base = spawn_app(build_app_state(seeded_pool().await, TIMEOUT)).await;

    let (status, body) = get(format!("{base}/banks/next?{}", cursor_param("2024-01-03T00:00:00Z"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "no next page found");

    let (status, body) =
        get(format!("{base}/banks/previous?{}", cursor_param("2024-01-01T00:00:00Z"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "no previous page found");
}

#[tokio::test]
async fn missing_or_malformed_cursor_is_bad_request() {
    let base = spawn_app(build_app_state(seeded_pool().await, TIMEOUT)).await;

    let (status, body) = get(format!("{base}/banks/next")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "error": "invalid timestamp" }));

    let (status, body) = get(format!("{base}/banks/previous?current_update_at=not-a-date")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid timestamp");

    let (status, body) = get(format!(
        "{base}/banks/next?{}&current_id=abc",
        cursor_param("2024-01-01T00:00:00Z")
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn composite_cursor_is_accepted() {
    let base = spawn_app(build_app_state(seeded_pool().await, TIMEOUT)).await;

    let (status, body) = get(format!(
        "{base}/banks/next?{}&current_id=2",
        cursor_param("2024-01-02T00:00:00Z")
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 3);
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let base = spawn_app(build_app_state(seeded_pool().await, TIMEOUT)).await;

    let (status, body) = get(format!("{base}/banks/sideways")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let health = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(health.text().await.unwrap(), "OK");
}

struct FailingRepository;

#[async_trait]
impl BankRepository for FailingRepository {
    async fn find_next(&self, _cursor: &PageCursor) -> Result<BankEntity, BankError> {
        Err(BankError::store(PageDirection::Next, sqlx::Error::PoolTimedOut))
    }

    async fn find_previous(&self, _cursor: &PageCursor) -> Result<BankEntity, BankError> {
        Err(BankError::store(PageDirection::Previous, sqlx::Error::PoolClosed))
    }
}

#[tokio::test]
async fn store_failure_is_internal_error() {
    let state = AppState::with_repository(Arc::new(FailingRepository), TIMEOUT);
    let base = spawn_app(state).await;

    let (status, body) = get(format!("{base}/banks/next?{}", cursor_param("2024-01-01T00:00:00Z"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let msg = body["error"].as_str().unwrap();
    assert!(msg.starts_with("failed to get next page bank: "), "{msg}");

    let (status, _) = get(format!("{base}/banks/previous?{}", cursor_param("2024-01-01T00:00:00Z"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

/// Never answers; flips `dropped` once its in-flight lookup is abandoned.
#[derive(Default)]
struct HangingRepository {
    dropped: Arc<AtomicBool>,
}

struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl BankRepository for HangingRepository {
    async fn find_next(&self, _cursor: &PageCursor) -> Result<BankEntity, BankError> {
        let _flag = DropFlag(self.dropped.clone());
        std::future::pending().await
    }

    async fn find_previous(&self, cursor: &PageCursor) -> Result<BankEntity, BankError> {
        self.find_next(cursor).await
    }
}

#[tokio::test]
async fn deadline_cancels_in_flight_lookup() {
    let repo = Arc::new(HangingRepository::default());
    let dropped = repo.dropped.clone();
    let base = spawn_app(AppState::with_repository(repo, Duration::from_millis(50))).await;

    let (status, body) = get(format!("{base}/banks/next?{}", cursor_param("2024-01-01T00:00:00Z"))).await;

    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(body["error"], "request timed out");
    assert!(dropped.load(Ordering::SeqCst));
}

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use crate::database::{connection::DatabaseManager, models::*};
use chrono::{DateTime, Utc};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub database: DatabaseHealth,
    pub birthdays: BirthdayStatus,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseHealth {
    pub status: String,
    pub connection_pool_size: u32,
    pub response_time_ms: u64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BirthdayStatus {
    pub people: i64,
    pub last_announced_on: Option<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseManager>,
    pub start_time: DateTime<Utc>,
}

pub struct HealthService {
    pub router: Router,
}

impl HealthService {
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        let state = AppState {
            db,
            start_time: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .route("/health/live", get(liveness_check))
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
            .with_state(state);

        Self { router }
    }
}

async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, StatusCode> {
    let start = std::time::Instant::now();

    if test_database_connection(&state.db).await.is_err() {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }
    let response_time_ms = start.elapsed().as_millis() as u64;

    let birthdays = match birthday_status(&state.db).await {
        Ok(status) => status,
        Err(e) => {
            tracing::warn!("Failed to read birthday status: {}", e);
            BirthdayStatus::default()
        }
    };

    let uptime = Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds()
        .max(0) as u64;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: DatabaseHealth {
            status: "healthy".to_string(),
            connection_pool_size: state.db.pool.size(),
            response_time_ms,
        },
        birthdays,
        uptime_seconds: uptime,
    }))
}

async fn readiness_check(State(state): State<AppState>) -> Result<Json<&'static str>, StatusCode> {
    match test_database_connection(&state.db).await {
        Ok(_) => Ok(Json("ready")),
        Err(_) => Err(StatusCode::SERVICE_UNAVAILABLE),
    }
}

async fn liveness_check() -> Json<&'static str> {
    Json("alive")
}

async fn test_database_connection(db: &DatabaseManager) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1")
        .fetch_one(&db.pool)
        .await?;

    Ok(())
}

async fn birthday_status(db: &DatabaseManager) -> Result<BirthdayStatus, sqlx::Error> {
    Ok(BirthdayStatus {
        people: Person::count(&db.pool).await?,
        last_announced_on: Announcement::latest(&db.pool).await?.map(|a| a.announced_on),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    async fn create_test_health_service() -> (HealthService, Arc<DatabaseManager>, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let db = Arc::new(
            DatabaseManager::new(&db_url)
                .await
                .expect("Failed to create test database")
        );
        db.run_migrations().await.expect("Failed to run migrations");

        (HealthService::new(db.clone()), db, temp_dir)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (health_service, db, _temp_dir) = create_test_health_service().await;
        Person::create(&db.pool, "Anna", "Lee", "2024-05-10", None)
            .await
            .expect("Failed to add person");
        let date = NaiveDate::from_ymd_opt(2026, 5, 10).expect("valid date");
        Announcement::record(&db.pool, date, 1)
            .await
            .expect("Failed to record announcement");

        let server = TestServer::new(health_service.router).expect("Failed to create test server");
        let response = server.get("/health").await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let health_response: HealthResponse = response.json();
        assert_eq!(health_response.status, "healthy");
        assert_eq!(health_response.database.status, "healthy");
        assert_eq!(health_response.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(health_response.birthdays.people, 1);
        assert_eq!(health_response.birthdays.last_announced_on.as_deref(), Some("2026-05-10"));
    }

    #[tokio::test]
    async fn test_readiness_endpoint() {
        let (health_service, _db, _temp_dir) = create_test_health_service().await;
        let server = TestServer::new(health_service.router).expect("Failed to create test server");

        let response = server.get("/health/ready").await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let ready_response: String = response.json();
        assert_eq!(ready_response, "ready");
    }

    #[tokio::test]
    async fn test_unreachable_database_reports_unavailable() {
        let (health_service, db, _temp_dir) = create_test_health_service().await;
        let server = TestServer::new(health_service.router).expect("Failed to create test server");

        db.pool.close().await;

        let response = server.get("/health").expect_failure().await;
        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let response = server.get("/health/ready").expect_failure().await;
        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        // Liveness does not touch the database
        let response = server.get("/health/live").await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_liveness_endpoint() {
        let (health_service, _db, _temp_dir) = create_test_health_service().await;
        let server = TestServer::new(health_service.router).expect("Failed to create test server");

        let response = server.get("/health/live").await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let alive_response: String = response.json();
        assert_eq!(alive_response, "alive");
    }
}

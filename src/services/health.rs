use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::database::connection::DatabaseManager;
use crate::database::models::Group;

/// Body of `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub database: DatabaseHealth,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseHealth {
    pub status: String,
    pub connection_pool_size: u32,
    pub response_time_ms: u64,
    /// Groups users can currently search for.
    pub registered_groups: i64,
}

#[derive(Clone)]
struct ProbeState {
    db: Arc<DatabaseManager>,
    started: DateTime<Utc>,
}

/// HTTP probes for process supervisors, served next to the bot.
pub struct HealthService {
    pub router: Router,
}

impl HealthService {
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        let state = ProbeState {
            db,
            started: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .route("/health/live", get(|| async { Json("alive") }))
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
            .with_state(state);

        Self { router }
    }
}

/// Pings the pool and counts groups; a failure of either means the bot
/// cannot answer searches.
async fn probe_database(db: &DatabaseManager) -> Result<DatabaseHealth, sqlx::Error> {
    let start = Instant::now();
    db.ping().await?;
    let registered_groups = Group::count(&db.pool).await?;

    Ok(DatabaseHealth {
        status: "healthy".to_string(),
        connection_pool_size: db.pool.size(),
        response_time_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        registered_groups,
    })
}

async fn health_check(State(state): State<ProbeState>) -> Result<Json<HealthResponse>, StatusCode> {
    let database = probe_database(&state.db).await.map_err(|e| {
        warn!("Health check database probe failed: {}", e);
        StatusCode::SERVICE_UNAVAILABLE
    })?;

    let now = Utc::now();
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: now,
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
        uptime_seconds: u64::try_from((now - state.started).num_seconds()).unwrap_or(0),
    }))
}

/// Ready once the schema is in place, not merely once the file opens.
async fn readiness_check(State(state): State<ProbeState>) -> Result<Json<&'static str>, StatusCode> {
    match probe_database(&state.db).await {
        Ok(_) => Ok(Json("ready")),
        Err(_) => Err(StatusCode::SERVICE_UNAVAILABLE),
    }
}

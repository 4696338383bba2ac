use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::storage::StateStore;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub storage: StorageReport,
    pub uptime_seconds: u64,
}

/// What the probe learned about the document store: whether the data
/// directory is usable and how many game documents live in it.
#[derive(Debug, Serialize, Deserialize)]
pub struct StorageReport {
    pub status: String,
    pub data_dir: String,
    pub game_documents: usize,
    pub probe_time_ms: u64,
}

#[derive(Clone)]
struct HealthState {
    store: Arc<StateStore>,
    started_at: DateTime<Utc>,
}

pub struct HealthService {
    pub router: Router,
}

impl HealthService {
    pub fn new(store: Arc<StateStore>) -> Self {
        let state = HealthState {
            store,
            started_at: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .route("/health/live", get(liveness_check))
            .with_state(state);

        Self { router }
    }
}

async fn health_check(State(state): State<HealthState>) -> Result<Json<HealthReport>, StatusCode> {
    let probe_started = std::time::Instant::now();
    let probed = probe_storage(&state.store).await;
    let probe_time_ms = probe_started.elapsed().as_millis() as u64;

    let uptime_seconds = Utc::now()
        .signed_duration_since(state.started_at)
        .num_seconds()
        .max(0) as u64;

    let (status, game_documents) = match probed {
        Ok(documents) => ("healthy", documents),
        Err(_) => ("unhealthy", 0),
    };

    let report = HealthReport {
        status: status.to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: StorageReport {
            status: status.to_string(),
            data_dir: state.store.data_dir().display().to_string(),
            game_documents,
            probe_time_ms,
        },
        uptime_seconds,
    };

    match status {
        "healthy" => Ok(Json(report)),
        _ => Err(StatusCode::SERVICE_UNAVAILABLE),
    }
}

async fn readiness_check(State(state): State<HealthState>) -> Result<Json<&'static str>, StatusCode> {
    match probe_storage(&state.store).await {
        Ok(_) => Ok(Json("ready")),
        Err(_) => Err(StatusCode::SERVICE_UNAVAILABLE),
    }
}

async fn liveness_check() -> Json<&'static str> {
    Json("alive")
}

/// Lists the data directory and counts the game documents in it. Failing
/// to list means the store cannot serve a single command.
async fn probe_storage(store: &StateStore) -> Result<usize, std::io::Error> {
    let mut entries = tokio::fs::read_dir(store.data_dir()).await?;
    let mut documents = 0;
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with("answers_chat_") && name.ends_with(".json") {
            documents += 1;
        }
    }
    Ok(documents)
}

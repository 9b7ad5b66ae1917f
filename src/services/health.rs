use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::sheets::AnswerSink;

/// Health report returned by `/health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "unhealthy".
    pub status: String,
    /// When the report was produced.
    pub timestamp: DateTime<Utc>,
    /// Crate version.
    pub version: String,
    /// State of the spreadsheet collaborator.
    pub storage: StorageHealth,
    /// Seconds since the service started.
    pub uptime_seconds: u64,
}

/// Spreadsheet reachability as seen from the health probe.
#[derive(Debug, Serialize, Deserialize)]
pub struct StorageHealth {
    /// "healthy" or "unhealthy".
    pub status: String,
    /// Probe round-trip time.
    pub response_time_ms: u64,
}

#[derive(Clone)]
struct HealthState {
    sink: Arc<dyn AnswerSink>,
    start_time: DateTime<Utc>,
}

/// HTTP health endpoints served next to the bot dispatcher.
pub struct HealthService {
    /// Router exposing `/health`, `/health/ready` and `/health/live`.
    pub router: Router,
}

impl HealthService {
    /// Build the health router over the answer sink.
    pub fn new(sink: Arc<dyn AnswerSink>) -> Self {
        let state = HealthState {
            sink,
            start_time: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .route("/health/live", get(liveness_check))
            .with_state(state);

        Self { router }
    }
}

async fn health_check(State(state): State<HealthState>) -> Result<Json<HealthResponse>, StatusCode> {
    let start = std::time::Instant::now();

    let storage_status = match state.sink.probe().await {
        Ok(()) => "healthy",
        Err(_) => "unhealthy",
    };

    let response_time_ms = start.elapsed().as_millis() as u64;
    let uptime = Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds()
        .max(0) as u64;

    let health_response = HealthResponse {
        status: storage_status.to_owned(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        storage: StorageHealth {
            status: storage_status.to_owned(),
            response_time_ms,
        },
        uptime_seconds: uptime,
    };

    if health_response.status == "healthy" {
        Ok(Json(health_response))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}

async fn readiness_check(State(state): State<HealthState>) -> Result<Json<&'static str>, StatusCode> {
    match state.sink.probe().await {
        Ok(()) => Ok(Json("ready")),
        Err(_) => Err(StatusCode::SERVICE_UNAVAILABLE),
    }
}

async fn liveness_check() -> Json<&'static str> {
    // If this endpoint responds, the service is alive.
    Json("alive")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use axum_test::TestServer;

    struct AlwaysHealthySink;

    #[async_trait]
    impl AnswerSink for AlwaysHealthySink {
        async fn ensure_header(&self, _columns: &[String]) -> Result<()> {
            Ok(())
        }

        async fn append_row(&self, _values: &[String]) -> Result<()> {
            Ok(())
        }
    }

    struct UnreachableSink;

    #[async_trait]
    impl AnswerSink for UnreachableSink {
        async fn ensure_header(&self, _columns: &[String]) -> Result<()> {
            Ok(())
        }

        async fn append_row(&self, _values: &[String]) -> Result<()> {
            Ok(())
        }

        async fn probe(&self) -> Result<()> {
            Err(anyhow::anyhow!("spreadsheet unreachable"))
        }
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let service = HealthService::new(Arc::new(AlwaysHealthySink));
        let server = TestServer::new(service.router).expect("Failed to create test server");

        let response = server.get("/health").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let health_response: HealthResponse = response.json();
        assert_eq!(health_response.status, "healthy");
        assert_eq!(health_response.storage.status, "healthy");
        assert_eq!(health_response.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_health_endpoint_unhealthy_storage() {
        let service = HealthService::new(Arc::new(UnreachableSink));
        let server = TestServer::new(service.router).expect("Failed to create test server");

        let response = server.get("/health").await;
        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_readiness_endpoint() {
        let service = HealthService::new(Arc::new(AlwaysHealthySink));
        let server = TestServer::new(service.router).expect("Failed to create test server");

        let response = server.get("/health/ready").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let ready_response: String = response.json();
        assert_eq!(ready_response, "ready");
    }

    #[tokio::test]
    async fn test_liveness_endpoint() {
        let service = HealthService::new(Arc::new(AlwaysHealthySink));
        let server = TestServer::new(service.router).expect("Failed to create test server");

        let response = server.get("/health/live").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let alive_response: String = response.json();
        assert_eq!(alive_response, "alive");
    }
}

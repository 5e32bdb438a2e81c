//! Liveness endpoint

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthData {
    pub status: &'static str,
}

/// `GET /health`. Does not contact the venue provider.
pub async fn health() -> Json<HealthData> {
    Json(HealthData { status: "ok" })
}

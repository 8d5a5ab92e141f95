use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::info;

pub struct HealthRoutes;

impl HealthRoutes {
    pub fn routes() -> Router {
        Router::new().route("/", get(health_handler))
    }
}

async fn health_handler() -> Json<Value> {
    info!("GET /health");
    Json(json!({
        "status": "up",
    }))
}

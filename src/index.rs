use axum::{debug_handler, Json};
use serde_json::{json, Value};

#[debug_handler]
pub async fn health() -> Json<Value> {
    Json(json!({
        "message": "Happy Teeth Dental Clinic API",
        "status": "active",
    }))
}

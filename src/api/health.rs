use axum::Json;
use serde_json::{Value, json};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message")
    )
)]
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Book Recommendation API!" }))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "bookshop-genie",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub mod error;
pub mod health;
pub mod recommend;

use axum::{
    Router,
    routing::{get, post},
};

use crate::infrastructure::AppState;

pub use error::ApiError;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        // Health check
        .route("/health", get(health::health_check))
        // Recommendations
        .route("/recommend_book", post(recommend::recommend_book))
        .with_state(state)
}

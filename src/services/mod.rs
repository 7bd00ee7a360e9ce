//! Services Layer
//!
//! Pure business logic, called by the Axum handlers.

pub mod recommendation_service;

// Re-export for convenience
pub use recommendation_service::{RECOMMENDATION_COUNT, RecommendationService};

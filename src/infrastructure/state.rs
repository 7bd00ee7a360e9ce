//! Application state shared by all handlers

use std::sync::Arc;

use crate::domain::VolumeLookup;
use crate::modules::recommender::Catalog;
use crate::services::RecommendationService;

#[derive(Clone)]
pub struct AppState {
    pub recommender: RecommendationService,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, lookup: Arc<dyn VolumeLookup>) -> Self {
        Self {
            recommender: RecommendationService::new(catalog, lookup),
        }
    }
}

impl axum::extract::FromRef<AppState> for RecommendationService {
    fn from_ref(state: &AppState) -> Self {
        state.recommender.clone()
    }
}

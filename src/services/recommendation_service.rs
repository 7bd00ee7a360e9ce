//! Recommendation Service - Pure business logic without HTTP layer
//!
//! Catalog hits are answered from precomputed description vectors. Unknown
//! titles go through the external lookup and are compared by description.

use std::sync::Arc;

use crate::domain::{DomainError, VolumeLookup};
use crate::models::RecommendedBook;
use crate::modules::recommender::{Catalog, is_valid_book_match};

/// Number of books returned per recommendation
pub const RECOMMENDATION_COUNT: usize = 5;

#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<Catalog>,
    lookup: Arc<dyn VolumeLookup>,
}

impl RecommendationService {
    pub fn new(catalog: Arc<Catalog>, lookup: Arc<dyn VolumeLookup>) -> Self {
        Self { catalog, lookup }
    }

    pub async fn recommend(&self, title: &str) -> Result<Vec<RecommendedBook>, DomainError> {
        let title = title.split_whitespace().collect::<Vec<_>>().join(" ");

        if title.is_empty() {
            return Err(DomainError::Validation("title must not be empty".to_string()));
        }

        if let Some(index) = self.catalog.find(&title) {
            tracing::info!("Book '{}' found in catalog", title);
            return Ok(self.catalog.neighbours(index, RECOMMENDATION_COUNT));
        }

        tracing::info!("Book '{}' not found in catalog, asking external lookup", title);
        self.recommend_from_lookup(&title).await
    }

    async fn recommend_from_lookup(&self, title: &str) -> Result<Vec<RecommendedBook>, DomainError> {
        let volume = self
            .lookup
            .first_volume(title)
            .await
            .ok_or(DomainError::NotFound)?;

        if !is_valid_book_match(title, &volume.title) {
            tracing::info!(
                "External match '{}' rejected for query '{}'",
                volume.title,
                title
            );
            return Err(DomainError::NotFound);
        }

        let description = volume.description.trim();
        if description.is_empty() {
            return Err(DomainError::NotFound);
        }

        let recommended = self
            .catalog
            .closest_to_text(description, RECOMMENDATION_COUNT);

        if recommended.is_empty() {
            return Err(DomainError::NotFound);
        }

        Ok(recommended)
    }
}

//! Lookup trait for books missing from the local catalog

use async_trait::async_trait;

/// The subset of an external volume record used for recommendations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolumeSummary {
    pub title: String,
    pub description: String,
}

/// Resolves a free-text title to the best external match
#[async_trait]
pub trait VolumeLookup: Send + Sync {
    /// First volume matching `title`, or `None` when nothing usable came back
    async fn first_volume(&self, title: &str) -> Option<VolumeSummary>;
}

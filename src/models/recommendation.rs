use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /recommend_book`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookRequest {
    pub title: String,
}

/// One recommended book, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecommendedBook {
    pub title: String,
    /// Already joined for display, e.g. "Terry Pratchett, Neil Gaiman"
    pub authors: String,
    /// Cover image URL
    pub thumbnail: String,
}

/// Error body returned by the recommendation API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

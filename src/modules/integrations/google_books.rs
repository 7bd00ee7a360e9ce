use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::{VolumeLookup, VolumeSummary};

pub const DEFAULT_VOLUMES_URL: &str = "https://www.googleapis.com/books/v1/volumes";

#[derive(Debug, Deserialize)]
struct GoogleBooksResponse {
    #[serde(rename = "totalItems", default)]
    total_items: u64,
    items: Option<Vec<GoogleBookItem>>,
}

#[derive(Debug, Deserialize)]
struct GoogleBookItem {
    #[serde(rename = "volumeInfo")]
    volume_info: GoogleVolumeInfo,
}

#[derive(Debug, Deserialize)]
struct GoogleVolumeInfo {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Clone)]
pub struct GoogleBooksClient {
    client: reqwest::Client,
    volumes_url: String,
}

impl GoogleBooksClient {
    pub fn new(volumes_url: impl Into<String>) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| format!("Failed to build client: {}", e))?;

        Ok(Self {
            client,
            volumes_url: volumes_url.into(),
        })
    }

    async fn fetch(&self, title: &str) -> Result<Option<VolumeSummary>, String> {
        let url = format!(
            "{}?q={}&maxResults=1",
            self.volumes_url,
            urlencoding::encode(title)
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        let body = resp
            .text()
            .await
            .map_err(|e| format!("Failed to read response body: {}", e))?;

        let parsed: GoogleBooksResponse =
            serde_json::from_str(&body).map_err(|e| format!("Failed to parse JSON: {}", e))?;

        if parsed.total_items == 0 {
            return Ok(None);
        }

        Ok(parsed
            .items
            .and_then(|items| items.into_iter().next())
            .map(|item| VolumeSummary {
                title: item.volume_info.title,
                description: item.volume_info.description,
            }))
    }
}

#[async_trait]
impl VolumeLookup for GoogleBooksClient {
    async fn first_volume(&self, title: &str) -> Option<VolumeSummary> {
        match self.fetch(title).await {
            Ok(volume) => {
                tracing::debug!("Google Books volume for '{}': {:?}", title, volume);
                volume
            }
            Err(e) => {
                tracing::warn!("Error fetching book data for '{}': {}", title, e);
                None
            }
        }
    }
}

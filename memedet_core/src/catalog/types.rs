use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog entry describing a meme template.
///
/// Only `id` and `keywords` participate in detection; the remaining fields
/// are display/media metadata passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemeRecord {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Ordered keyword list. A meme with an empty list is never matched.
    pub keywords: Vec<String>,
    pub template_image_url: Option<String>,
    pub video_url: String,
    pub category: Option<String>,
    pub popularity_score: i32,
    pub created_at: DateTime<Utc>,
}

impl MemeRecord {
    /// Create a new record with the current timestamp.
    #[must_use]
    pub fn new(id: &str, name: &str, keywords: Vec<String>, video_url: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            keywords,
            template_image_url: None,
            video_url: video_url.to_string(),
            category: None,
            popularity_score: 0,
            created_at: Utc::now(),
        }
    }

    /// Whether this record is eligible for keyword matching.
    #[must_use]
    pub fn matchable(&self) -> bool {
        !self.keywords.is_empty()
    }
}

/// Query-by-field filter for catalog listings.
///
/// Results are always ordered by `popularity_score` descending, then `id`
/// ascending, so corpus iteration order is deterministic.
#[derive(Debug, Clone, Default)]
pub struct MemeFilter {
    /// Exact category match.
    pub category: Option<String>,
    /// Case-insensitive substring search over name and description.
    pub search: Option<String>,
    /// Maximum number of results.
    pub limit: Option<u64>,
}

impl MemeFilter {
    /// Filter matching the whole catalog, in deterministic corpus order.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }
}

/// A user's saved set of meme selections plus client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSelection {
    pub id: i32,
    pub user_id: String,
    pub meme_ids: Vec<String>,
    pub settings: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Playable video source for a meme, with display metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoSource {
    #[serde(rename = "videoUrl")]
    pub video_url: String,
    pub metadata: VideoMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub name: String,
    pub category: Option<String>,
}

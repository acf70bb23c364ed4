use serde::{Deserialize, Serialize};

/// Detection request as sent over the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionRequest {
    /// Raw page text to analyze. Bounded by [`DetectionLimits`].
    #[serde(default)]
    pub content: String,
    /// Accepted for forward compatibility; never inspected.
    #[serde(rename = "imageUrls", default)]
    pub image_urls: Vec<String>,
}

impl DetectionRequest {
    /// Request carrying only text content.
    #[must_use]
    pub fn from_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
            image_urls: Vec::new(),
        }
    }
}

/// A single scored match against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionMatch {
    #[serde(rename = "memeId")]
    pub meme_id: String,
    /// Match strength in `[0.0, 1.0]`, rounded to 2 decimal places.
    pub confidence: f64,
}

/// Ordered detection result, strongest match first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionResponse {
    pub matches: Vec<DetectionMatch>,
}

/// Request bounds enforced before the engine runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DetectionLimits {
    #[serde(default = "DetectionLimits::default_max_content_length")]
    pub max_content_length: usize,
    #[serde(default = "DetectionLimits::default_max_image_urls")]
    pub max_image_urls: usize,
}

impl Default for DetectionLimits {
    fn default() -> Self {
        Self {
            max_content_length: Self::default_max_content_length(),
            max_image_urls: Self::default_max_image_urls(),
        }
    }
}

impl DetectionLimits {
    const fn default_max_content_length() -> usize {
        50_000
    }

    const fn default_max_image_urls() -> usize {
        50
    }

    /// Reject oversized requests. The engine itself is total over valid
    /// input and never raises; all rejection happens here.
    pub fn validate(&self, request: &DetectionRequest) -> Result<(), DetectionError> {
        let len = request.content.chars().count();
        if len > self.max_content_length {
            return Err(DetectionError::ContentTooLong {
                len,
                max: self.max_content_length,
            });
        }
        if request.image_urls.len() > self.max_image_urls {
            return Err(DetectionError::TooManyImageUrls {
                len: request.image_urls.len(),
                max: self.max_image_urls,
            });
        }
        Ok(())
    }
}

/// Invalid-input taxonomy for detection requests.
///
/// Zero matches is not an error; an empty match list is a valid response.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("content length {len} exceeds maximum of {max} characters")]
    ContentTooLong { len: usize, max: usize },
    #[error("{len} image urls exceed maximum of {max}")]
    TooManyImageUrls { len: usize, max: usize },
}

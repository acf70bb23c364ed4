//! Keyword-overlap meme detection.
//!
//! The engine maps arbitrary page text to a ranked list of meme matches by
//! counting case-insensitive keyword hits per catalog record and deriving a
//! confidence score from the hit ratio. Pure computation: no I/O, no shared
//! state, safe to call from any number of concurrent requests.

mod engine;
mod types;

pub use engine::{confidence, detect, keyword_hits};
pub use types::{
    DetectionError, DetectionLimits, DetectionMatch, DetectionRequest, DetectionResponse,
};

#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_precision_loss
)]

pub mod catalog;
pub mod detection;

pub use catalog::{
    MemeFilter, MemeRecord, MemeRepo, UserSelection, UserSelectionRepo, VideoMetadata, VideoSource,
};
pub use detection::{
    DetectionError, DetectionLimits, DetectionMatch, DetectionRequest, DetectionResponse, detect,
};

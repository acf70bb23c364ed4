//! Catalog persistence and the detection service.
//!
//! This crate implements the record-store side of the system:
//! - CRUD over meme records and user selections (sea-orm)
//! - schema initialization and the sample seed corpus
//! - `DetectionService`, which snapshots the corpus and runs the engine

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
    clippy::missing_errors_doc
)]

mod convert;
pub mod seed;
mod service;
mod store;

pub use seed::{sample_memes, seed_catalog};
pub use service::DetectionService;
pub use store::CatalogStore;

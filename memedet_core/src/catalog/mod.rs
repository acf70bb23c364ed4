//! Catalog domain types and repository seams.
//!
//! The catalog is the record store of known memes plus per-user selections.
//! This crate only defines the types and the async repository traits; the
//! sea-orm implementation lives in `memedet_catalog`.

mod repository;
mod types;

pub use repository::{MemeRepo, UserSelectionRepo};
pub use types::{MemeFilter, MemeRecord, UserSelection, VideoMetadata, VideoSource};

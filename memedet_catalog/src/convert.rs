//! Conversion between sea-orm entity models and domain records.

use memedet_core::{MemeRecord, UserSelection};
use memedet_entities::{memes, user_selections};

/// Decode a JSON string-array column (keywords, meme ids) into an ordered
/// string list.
///
/// Non-string entries and non-array values are dropped silently: keyword
/// data quality is the record store's concern, and the matcher treats a
/// record with no usable keywords as unmatchable rather than erroring.
pub fn strings_from_json(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.as_str().map(ToString::to_string))
                .collect()
        })
        .unwrap_or_default()
}

pub fn strings_to_json(keywords: &[String]) -> serde_json::Value {
    serde_json::Value::Array(
        keywords
            .iter()
            .map(|k| serde_json::Value::String(k.clone()))
            .collect(),
    )
}

pub fn meme_to_record(model: memes::Model) -> MemeRecord {
    MemeRecord {
        id: model.id,
        name: model.name,
        description: model.description,
        keywords: strings_from_json(&model.keywords),
        template_image_url: model.template_image_url,
        video_url: model.video_url,
        category: model.category,
        popularity_score: model.popularity_score,
        created_at: model.created_at.to_utc(),
    }
}

pub fn selection_to_domain(model: user_selections::Model) -> UserSelection {
    UserSelection {
        id: model.id,
        user_id: model.user_id,
        meme_ids: strings_from_json(&model.meme_ids),
        settings: model.settings,
        created_at: model.created_at.to_utc(),
        updated_at: model.updated_at.to_utc(),
    }
}

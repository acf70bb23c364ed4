//! Integration tests for the catalog store and detection service.
//!
//! These run against an in-memory SQLite database, so they exercise the
//! real query paths (JSON keyword column, filtered listing, upserts)
//! without external setup.

use std::sync::Arc;

use memedet_catalog::{CatalogStore, DetectionService, seed_catalog};
use memedet_core::{
    DetectionLimits, DetectionRequest, MemeFilter, MemeRecord, MemeRepo, UserSelectionRepo,
};
use sea_orm::ConnectOptions;

/// A fresh in-memory catalog with initialized schema.
///
/// `max_connections(1)` keeps the whole pool on one SQLite connection so
/// every query sees the same in-memory database.
async fn fresh_store() -> CatalogStore {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1);

    let db = sea_orm::Database::connect(options)
        .await
        .expect("Failed to open in-memory database");

    let store = CatalogStore::from_connection(db);
    store.init_schema().await.expect("Failed to create schema");
    store
}

fn record(id: &str, keywords: &[&str], popularity: i32) -> MemeRecord {
    let mut record = MemeRecord::new(
        id,
        id,
        keywords.iter().map(ToString::to_string).collect(),
        "https://example.com/v.mp4",
    );
    record.popularity_score = popularity;
    record
}

#[tokio::test]
async fn insert_and_find_round_trips_keywords() {
    let store = fresh_store().await;

    let meme = record("stonks", &["stonks", "stocks", "profit"], 86);
    store.insert(&meme).await.expect("insert failed");

    let found = store
        .find_by_id("stonks")
        .await
        .expect("find failed")
        .expect("meme not found");

    assert_eq!(found.id, "stonks");
    assert_eq!(found.keywords, vec!["stonks", "stocks", "profit"]);
    assert_eq!(found.popularity_score, 86);
}

#[tokio::test]
async fn insert_with_existing_id_replaces_record() {
    let store = fresh_store().await;

    store
        .insert(&record("doge", &["doge"], 10))
        .await
        .expect("insert failed");
    store
        .insert(&record("doge", &["doge", "shiba inu"], 91))
        .await
        .expect("re-insert failed");

    let all = store.list(&MemeFilter::all()).await.expect("list failed");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].keywords.len(), 2);
    assert_eq!(all[0].popularity_score, 91);
}

#[tokio::test]
async fn list_orders_by_popularity_then_id() {
    let store = fresh_store().await;

    store
        .insert(&record("zeta", &["z"], 50))
        .await
        .expect("insert failed");
    store
        .insert(&record("alpha", &["a"], 50))
        .await
        .expect("insert failed");
    store
        .insert(&record("top", &["t"], 99))
        .await
        .expect("insert failed");

    let all = store.list(&MemeFilter::all()).await.expect("list failed");
    let ids: Vec<&str> = all.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["top", "alpha", "zeta"]);
}

#[tokio::test]
async fn list_filters_by_category_and_search() {
    let store = fresh_store().await;
    seed_catalog(&store).await.expect("seed failed");

    let finance = store
        .list(&MemeFilter {
            category: Some("finance".to_string()),
            ..MemeFilter::default()
        })
        .await
        .expect("list failed");
    assert_eq!(finance.len(), 1);
    assert_eq!(finance[0].id, "stonks");

    let searched = store
        .list(&MemeFilter {
            search: Some("Pikachu".to_string()),
            ..MemeFilter::default()
        })
        .await
        .expect("list failed");
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].id, "surprised-pikachu");

    let limited = store
        .list(&MemeFilter {
            limit: Some(5),
            ..MemeFilter::default()
        })
        .await
        .expect("list failed");
    assert_eq!(limited.len(), 5);
}

#[tokio::test]
async fn search_is_case_insensitive_over_name_and_description() {
    let store = fresh_store().await;
    seed_catalog(&store).await.expect("seed failed");

    // "Surprised Pikachu" is capitalized in the stored name; any casing of
    // the search term must find it.
    for term in ["pikachu", "PIKACHU", "Pikachu"] {
        let found = store
            .list(&MemeFilter {
                search: Some(term.to_string()),
                ..MemeFilter::default()
            })
            .await
            .expect("list failed");
        assert_eq!(found.len(), 1, "search term {term:?}");
        assert_eq!(found[0].id, "surprised-pikachu");
    }

    // Description-only hit: "Ghanaian pallbearers dancing with a coffin".
    let by_description = store
        .list(&MemeFilter {
            search: Some("ghanaian".to_string()),
            ..MemeFilter::default()
        })
        .await
        .expect("list failed");
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].id, "coffin-dance");
}

#[tokio::test]
async fn seeding_twice_does_not_duplicate() {
    let store = fresh_store().await;

    let first = seed_catalog(&store).await.expect("seed failed");
    let second = seed_catalog(&store).await.expect("re-seed failed");
    assert_eq!(first, second);

    let all = store.list(&MemeFilter::all()).await.expect("list failed");
    assert_eq!(all.len(), first);
}

#[tokio::test]
async fn video_source_returns_url_and_metadata() {
    let store = fresh_store().await;
    seed_catalog(&store).await.expect("seed failed");

    let source = store
        .video_source("rickroll")
        .await
        .expect("lookup failed")
        .expect("meme not found");

    assert_eq!(source.video_url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    assert_eq!(source.metadata.name, "Rickroll");
    assert_eq!(source.metadata.category.as_deref(), Some("classic"));

    let missing = store.video_source("no-such-meme").await.expect("lookup failed");
    assert!(missing.is_none());
}

#[tokio::test]
async fn selection_upsert_replaces_ids_and_refreshes_timestamp() {
    let store = fresh_store().await;

    let first = store
        .upsert("user-1", &["doge".to_string()], None)
        .await
        .expect("upsert failed");
    assert_eq!(first.meme_ids, vec!["doge"]);

    let settings = serde_json::json!({"autoplay": true});
    let second = store
        .upsert(
            "user-1",
            &["stonks".to_string(), "wojak".to_string()],
            Some(settings.clone()),
        )
        .await
        .expect("second upsert failed");

    assert_eq!(second.id, first.id);
    assert_eq!(second.meme_ids, vec!["stonks", "wojak"]);
    assert_eq!(second.settings, Some(settings));
    assert!(second.updated_at >= first.updated_at);

    let fetched = store
        .find_by_user("user-1")
        .await
        .expect("find failed")
        .expect("selection not found");
    assert_eq!(fetched.meme_ids, vec!["stonks", "wojak"]);
}

#[tokio::test]
async fn detection_service_matches_seeded_corpus() {
    let store = Arc::new(fresh_store().await);
    seed_catalog(store.as_ref()).await.expect("seed failed");

    let service = DetectionService::new(store);
    let request =
        DetectionRequest::from_content("the market is full of stonks and profit right now");

    let response = service.detect(&request).await.expect("detect failed");

    assert_eq!(response.matches[0].meme_id, "stonks");
    assert!((response.matches[0].confidence - 0.40).abs() < f64::EPSILON);
}

#[tokio::test]
async fn detection_service_rejects_oversized_content() {
    let store = Arc::new(fresh_store().await);

    let limits = DetectionLimits {
        max_content_length: 10,
        max_image_urls: 2,
    };
    let service = DetectionService::with_limits(store, limits);

    let too_long = DetectionRequest::from_content("this content is longer than ten characters");
    assert!(service.detect(&too_long).await.is_err());

    let mut too_many = DetectionRequest::from_content("ok");
    too_many.image_urls = vec!["a".into(), "b".into(), "c".into()];
    assert!(service.detect(&too_many).await.is_err());

    let fine = DetectionRequest::from_content("ok");
    assert!(service.detect(&fine).await.is_ok());
}

#[tokio::test]
async fn empty_content_yields_empty_matches() {
    let store = Arc::new(fresh_store().await);
    seed_catalog(store.as_ref()).await.expect("seed failed");

    let service = DetectionService::new(store);
    let response = service
        .detect(&DetectionRequest::default())
        .await
        .expect("detect failed");

    assert!(response.matches.is_empty());
}

use async_trait::async_trait;

use super::types::{MemeFilter, MemeRecord, UserSelection};

/// Read/write access to the meme catalog.
///
/// Implementations are explicitly constructed handles with a defined
/// lifecycle (connect at startup, drop at shutdown); there is no
/// module-level connection singleton.
#[async_trait]
pub trait MemeRepo: Send + Sync {
    /// List records matching the filter, in deterministic corpus order
    /// (popularity descending, id ascending).
    async fn list(&self, filter: &MemeFilter) -> anyhow::Result<Vec<MemeRecord>>;

    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<MemeRecord>>;

    /// Insert a record, replacing any existing record with the same id.
    async fn insert(&self, record: &MemeRecord) -> anyhow::Result<()>;

    async fn delete(&self, id: &str) -> anyhow::Result<()>;
}

/// Storage of per-user meme selections.
#[async_trait]
pub trait UserSelectionRepo: Send + Sync {
    /// Create or replace the selection row for `user_id`, refreshing its
    /// `updated_at` timestamp.
    async fn upsert(
        &self,
        user_id: &str,
        meme_ids: &[String],
        settings: Option<serde_json::Value>,
    ) -> anyhow::Result<UserSelection>;

    async fn find_by_user(&self, user_id: &str) -> anyhow::Result<Option<UserSelection>>;
}

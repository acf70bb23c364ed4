use async_trait::async_trait;
use chrono::Utc;
use memedet_core::{
    MemeFilter, MemeRecord, MemeRepo, UserSelection, UserSelectionRepo, VideoMetadata, VideoSource,
};
use memedet_entities::{memes, user_selections};
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, Condition, ConnectionTrait, Database,
    DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Schema, Set,
};
use tracing::info;

use crate::convert;

/// Catalog store over a sea-orm connection.
///
/// The store is an explicitly constructed handle: connect at process start,
/// drop at shutdown. All repository traits are implemented on it.
pub struct CatalogStore {
    db: DatabaseConnection,
}

impl CatalogStore {
    /// Connect to the catalog database.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        info!("Connecting to catalog database");
        let db = Database::connect(database_url).await?;
        info!("CatalogStore initialized");
        Ok(Self { db })
    }

    /// Wrap an already established connection.
    #[must_use]
    pub const fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get a reference to the database connection.
    #[must_use]
    pub const fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Create the catalog tables if they do not exist yet.
    pub async fn init_schema(&self) -> anyhow::Result<()> {
        let backend = self.db.get_database_backend();
        let schema = Schema::new(backend);

        let mut memes_table = schema.create_table_from_entity(memes::Entity);
        memes_table.if_not_exists();
        self.db.execute(&memes_table).await?;

        let mut selections_table = schema.create_table_from_entity(user_selections::Entity);
        selections_table.if_not_exists();
        self.db.execute(&selections_table).await?;

        info!("Catalog schema initialized");
        Ok(())
    }

    /// Video URL plus display metadata for a meme, if it exists.
    pub async fn video_source(&self, meme_id: &str) -> anyhow::Result<Option<VideoSource>> {
        let model = memes::Entity::find_by_id(meme_id).one(&self.db).await?;

        Ok(model.map(|meme| VideoSource {
            video_url: meme.video_url,
            metadata: VideoMetadata {
                name: meme.name,
                category: meme.category,
            },
        }))
    }

    fn to_active_model(record: &MemeRecord) -> memes::ActiveModel {
        memes::ActiveModel {
            id: Set(record.id.clone()),
            name: Set(record.name.clone()),
            description: Set(record.description.clone()),
            keywords: Set(convert::strings_to_json(&record.keywords)),
            template_image_url: Set(record.template_image_url.clone()),
            video_url: Set(record.video_url.clone()),
            category: Set(record.category.clone()),
            popularity_score: Set(record.popularity_score),
            created_at: Set(record.created_at.into()),
        }
    }
}

#[async_trait]
impl MemeRepo for CatalogStore {
    async fn list(&self, filter: &MemeFilter) -> anyhow::Result<Vec<MemeRecord>> {
        let mut query = memes::Entity::find();

        if let Some(category) = &filter.category {
            query = query.filter(memes::Column::Category.eq(category.clone()));
        }

        if let Some(search) = &filter.search {
            // Case-insensitive on every backend; plain LIKE is
            // case-sensitive on Postgres.
            let term = format!("%{}%", search.to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(Func::lower(Expr::col(memes::Column::Name)).like(term.clone()))
                    .add(Func::lower(Expr::col(memes::Column::Description)).like(term)),
            );
        }

        // Deterministic corpus order; detection tie-breaks rely on it.
        query = query
            .order_by_desc(memes::Column::PopularityScore)
            .order_by_asc(memes::Column::Id);

        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        let models = query.all(&self.db).await?;
        Ok(models.into_iter().map(convert::meme_to_record).collect())
    }

    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<MemeRecord>> {
        let model = memes::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(convert::meme_to_record))
    }

    async fn insert(&self, record: &MemeRecord) -> anyhow::Result<()> {
        let model = Self::to_active_model(record);

        let existing = memes::Entity::find_by_id(&record.id).one(&self.db).await?;
        if existing.is_some() {
            model.update(&self.db).await?;
            info!("Updated meme: {}", record.id);
        } else {
            model.insert(&self.db).await?;
            info!("Created meme: {}", record.id);
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> anyhow::Result<()> {
        memes::Entity::delete_by_id(id).exec(&self.db).await?;
        info!("Deleted meme: {id}");
        Ok(())
    }
}

#[async_trait]
impl UserSelectionRepo for CatalogStore {
    async fn upsert(
        &self,
        user_id: &str,
        meme_ids: &[String],
        settings: Option<serde_json::Value>,
    ) -> anyhow::Result<UserSelection> {
        let now = Utc::now();
        let ids_json = convert::strings_to_json(meme_ids);

        let existing = user_selections::Entity::find()
            .filter(user_selections::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?;

        let model = if let Some(existing) = existing {
            let mut active: user_selections::ActiveModel = existing.into();
            active.meme_ids = Set(ids_json);
            active.settings = Set(settings);
            active.updated_at = Set(now.into());
            let updated = active.update(&self.db).await?;
            info!("Updated selection for user: {user_id}");
            updated
        } else {
            let active = user_selections::ActiveModel {
                id: NotSet,
                user_id: Set(user_id.to_string()),
                meme_ids: Set(ids_json),
                settings: Set(settings),
                created_at: Set(now.into()),
                updated_at: Set(now.into()),
            };
            let inserted = active.insert(&self.db).await?;
            info!("Created selection for user: {user_id}");
            inserted
        };

        Ok(convert::selection_to_domain(model))
    }

    async fn find_by_user(&self, user_id: &str) -> anyhow::Result<Option<UserSelection>> {
        let model = user_selections::Entity::find()
            .filter(user_selections::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?;

        Ok(model.map(convert::selection_to_domain))
    }
}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A meme catalog row. Keywords are stored as a JSON array of strings.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "memes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub keywords: Json,
    pub template_image_url: Option<String>,
    pub video_url: String,
    pub category: Option<String>,
    pub popularity_score: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

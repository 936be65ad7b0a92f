use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

use crate::model::{ModelManager, error::DatabaseResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, utoipa::ToSchema)]
pub struct Lesson {
    id: Uuid,
    module_id: Uuid,
    title: String,
    content: String,
    video_url: Option<String>,
    duration_minutes: Option<i32>,
    order_index: i32,
    is_published: bool,
    created_at: DateTime<Utc>,
}

impl Lesson {
    pub fn new(id: Uuid, data: LessonCreate) -> Self {
        Self {
            id,
            module_id: data.module_id,
            title: data.title,
            content: data.content.unwrap_or_default(),
            video_url: data.video_url,
            duration_minutes: data.duration_minutes,
            order_index: data.order_index.unwrap_or(0),
            is_published: data.is_published,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn order_index(&self) -> i32 {
        self.order_index
    }

    pub fn is_published(&self) -> bool {
        self.is_published
    }
}

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LessonCreate {
    pub module_id: Uuid,
    pub title: String,
    pub content: Option<String>,
    pub video_url: Option<String>,
    pub duration_minutes: Option<i32>,
    pub order_index: Option<i32>,
    pub is_published: bool,
}

impl Lesson {
    pub async fn create(mm: &ModelManager, data: LessonCreate) -> DatabaseResult<Self> {
        let lesson: Lesson = sqlx::query_as(
            r#"
            INSERT INTO lessons
                (id, module_id, title, content, video_url, duration_minutes, order_index, is_published)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.module_id)
        .bind(&data.title)
        .bind(data.content.as_deref().unwrap_or_default())
        .bind(&data.video_url)
        .bind(data.duration_minutes)
        .bind(data.order_index.unwrap_or(0))
        .bind(data.is_published)
        .fetch_one(mm.executor())
        .await?;

        Ok(lesson)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

use crate::model::repo::ResourceTyped;
use crate::model::{ModelManager, error::DatabaseResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, utoipa::ToSchema)]
pub struct Course {
    id: Uuid,
    title: String,
    slug: String,
    description: String,
    category: Option<String>,
    level: Option<String>,
    price: Option<f64>,
    thumbnail_url: Option<String>,
    is_published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CourseCreate {
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub price: Option<f64>,
    pub thumbnail_url: Option<String>,
    pub is_published: bool,
}

impl ResourceTyped for Course {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Course
    }
}

impl Course {
    /// Builds a course in memory, stamped with the current time.
    pub fn new(id: Uuid, data: CourseCreate) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: data.title,
            slug: data.slug,
            description: data.description.unwrap_or_default(),
            category: data.category,
            level: data.level,
            price: data.price,
            thumbnail_url: data.thumbnail_url,
            is_published: data.is_published,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn is_published(&self) -> bool {
        self.is_published
    }
}

impl Course {
    pub async fn create(mm: &ModelManager, data: CourseCreate) -> DatabaseResult<Self> {
        let course: Course = sqlx::query_as(
            r#"
            INSERT INTO courses
                (id, title, slug, description, category, level, price, thumbnail_url, is_published)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.title)
        .bind(&data.slug)
        .bind(data.description.as_deref().unwrap_or_default())
        .bind(&data.category)
        .bind(&data.level)
        .bind(data.price)
        .bind(&data.thumbnail_url)
        .bind(data.is_published)
        .fetch_one(mm.executor())
        .await?;

        Ok(course)
    }

    /// Flips the publication flag. Returns `false` when no course has `id`.
    pub async fn set_published(mm: &ModelManager, id: Uuid, published: bool) -> DatabaseResult<bool> {
        let result = sqlx::query(
            "UPDATE courses SET is_published = $1, updated_at = NOW() WHERE id = $2",
        )
        .bind(published)
        .bind(id)
        .execute(mm.executor())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_published(mm: &ModelManager, id: Uuid) -> DatabaseResult<Option<Self>> {
        let result = sqlx::query_as("SELECT * FROM courses WHERE id = $1 AND is_published = TRUE")
            .bind(id)
            .fetch_optional(mm.executor())
            .await?;

        Ok(result)
    }

    pub async fn all_published(mm: &ModelManager) -> DatabaseResult<Vec<Self>> {
        let result = sqlx::query_as(
            "SELECT * FROM courses WHERE is_published = TRUE ORDER BY created_at DESC, id",
        )
        .fetch_all(mm.executor())
        .await?;

        Ok(result)
    }
}

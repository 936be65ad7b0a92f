use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

use crate::model::entity::Lesson;
use crate::model::repo::ResourceTyped;
use crate::model::{ModelManager, error::DatabaseResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, utoipa::ToSchema)]
pub struct Module {
    id: Uuid,
    course_id: Uuid,
    title: String,
    description: String,
    order_index: i32,
    is_published: bool,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct ModuleCreate {
    pub course_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub order_index: Option<i32>,
    pub is_published: bool,
}

impl ResourceTyped for Module {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Module
    }
}

impl Module {
    pub fn new(id: Uuid, data: ModuleCreate) -> Self {
        Self {
            id,
            course_id: data.course_id,
            title: data.title,
            description: data.description.unwrap_or_default(),
            order_index: data.order_index.unwrap_or(0),
            is_published: data.is_published,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn course_id(&self) -> Uuid {
        self.course_id
    }

    pub fn order_index(&self) -> i32 {
        self.order_index
    }

    pub fn is_published(&self) -> bool {
        self.is_published
    }
}

impl Module {
    pub async fn create(mm: &ModelManager, data: ModuleCreate) -> DatabaseResult<Self> {
        let module: Module = sqlx::query_as(
            r#"
            INSERT INTO modules (id, course_id, title, description, order_index, is_published)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.course_id)
        .bind(&data.title)
        .bind(data.description.as_deref().unwrap_or_default())
        .bind(data.order_index.unwrap_or(0))
        .bind(data.is_published)
        .fetch_one(mm.executor())
        .await?;

        Ok(module)
    }
}

/// A module with its lessons embedded, as served to the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ModuleWithLessons {
    #[serde(flatten)]
    pub module: Module,
    pub lessons: Vec<Lesson>,
}

impl ModuleWithLessons {
    pub fn new(module: Module, lessons: Vec<Lesson>) -> Self {
        Self { module, lessons }
    }

    pub fn order_index(&self) -> i32 {
        self.module.order_index
    }

    pub fn from_rows(rows: Vec<ModuleWithLessonsRow>) -> DatabaseResult<Vec<Self>> {
        Ok(rows
            .into_iter()
            .map(ModuleWithLessons::try_from)
            .collect::<Result<_, _>>()?)
    }
}

impl TryFrom<ModuleWithLessonsRow> for ModuleWithLessons {
    type Error = serde_json::Error;

    fn try_from(value: ModuleWithLessonsRow) -> Result<Self, Self::Error> {
        Ok(Self {
            module: Module {
                id: value.id,
                course_id: value.course_id,
                title: value.title,
                description: value.description,
                order_index: value.order_index,
                is_published: value.is_published,
                created_at: value.created_at,
            },
            lessons: serde_json::from_value(value.lessons)?,
        })
    }
}

// Utils

#[derive(sqlx::FromRow)]
pub struct ModuleWithLessonsRow {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub description: String,
    pub order_index: i32,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub lessons: serde_json::Value,
}

impl ModuleWithLessonsRow {
    /// Lessons ride along with their module unfiltered; only the module's own
    /// `is_published` gates them.
    pub async fn fetch_published(mm: &ModelManager, course_id: Uuid) -> DatabaseResult<Vec<Self>> {
        let rows: Vec<ModuleWithLessonsRow> = sqlx::query_as(
            r#"
            SELECT
                m.id,
                m.course_id,
                m.title,
                m.description,
                m.order_index,
                m.is_published,
                m.created_at,
                COALESCE(
                    json_agg(to_json(l)) FILTER (WHERE l.id IS NOT NULL),
                    '[]'
                ) AS lessons
            FROM modules m
            LEFT JOIN lessons l ON l.module_id = m.id
            WHERE m.course_id = $1
            AND m.is_published = TRUE
            GROUP BY m.id
            ORDER BY m.order_index ASC, m.id;
            "#,
        )
        .bind(course_id)
        .fetch_all(mm.executor())
        .await?;

        Ok(rows)
    }
}

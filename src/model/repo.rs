use uuid::Uuid;

use crate::model::{
    ModelManager,
    entity::{Course, ModuleWithLessons, ModuleWithLessonsRow},
    error::DatabaseResult,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResourceType {
    Course,
    Module,
}

pub trait ResourceTyped {
    fn get_resource_type() -> ResourceType;
}

/// Read side of the course catalogue.
///
/// Every method is a single point-in-time read; nothing here writes, and no
/// consistency is promised between two calls.
#[async_trait::async_trait]
pub trait CourseStore: std::fmt::Debug + Send + Sync {
    /// The course with `id`, only if it is published.
    async fn find_published_course(&self, id: Uuid) -> DatabaseResult<Option<Course>>;

    /// Published modules of a course ascending by `order_index`, each with all
    /// of its lessons. Lessons are not filtered by their own publication flag.
    async fn published_modules(&self, course_id: Uuid) -> DatabaseResult<Vec<ModuleWithLessons>>;

    /// Every published course, newest first.
    async fn published_courses(&self) -> DatabaseResult<Vec<Course>>;
}

#[async_trait::async_trait]
impl CourseStore for ModelManager {
    async fn find_published_course(&self, id: Uuid) -> DatabaseResult<Option<Course>> {
        Course::find_published(self, id).await
    }

    async fn published_modules(&self, course_id: Uuid) -> DatabaseResult<Vec<ModuleWithLessons>> {
        let rows = ModuleWithLessonsRow::fetch_published(self, course_id).await?;
        ModuleWithLessons::from_rows(rows)
    }

    async fn published_courses(&self) -> DatabaseResult<Vec<Course>> {
        Course::all_published(self).await
    }
}

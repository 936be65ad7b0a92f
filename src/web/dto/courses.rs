use serde::{Deserialize, Serialize};

use crate::model::entity::{Course, ModuleWithLessons};

/// Successful envelope: `{ "success": true, "data": ... }`.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Published courses as listed by the catalogue page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(transparent)]
pub struct CourseCatalogue(pub Vec<Course>);

/// Course row with its published modules under `modules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CourseWithModules {
    #[serde(flatten)]
    pub course: Course,
    pub modules: Vec<ModuleWithLessons>,
}

impl CourseWithModules {
    /// Modules end up ascending by `order_index` whatever order they came in.
    pub fn new(course: Course, mut modules: Vec<ModuleWithLessons>) -> Self {
        modules.sort_by_key(ModuleWithLessons::order_index);
        Self { course, modules }
    }
}

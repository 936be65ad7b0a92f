use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use tower_http::catch_panic::CatchPanicLayer;
use uuid::Uuid;

use crate::{
    error::log_error,
    model::{CourseStore, ResourceTyped, entity::Module},
    web::{
        AppState, WebError, WebResult,
        dto::{CourseCatalogue, CourseWithModules, DataResponse},
        error::{ErrorResponse, panic_response},
    },
};

#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CourseQuery {
    /// Course identifier
    id: Option<String>,
}

impl CourseQuery {
    /// Repeated keys are allowed; the first `id` wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let id = pairs.into_iter().find(|(k, _)| k == "id").map(|(_, v)| v);
        Self { id }
    }

    /// `None` when `id` is absent or empty.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/get-course", get(get_course_handler))
        .route("/get-courses", get(get_courses_handler))
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/get-course",
    description = "Fetch one published course with its published modules and their lessons",
    params(CourseQuery),
    responses(
        (status = 200, description = "Course found", body = DataResponse<CourseWithModules>),
        (status = 400, description = "`id` is missing or empty", body = ErrorResponse),
        (status = 404, description = "No published course with this id", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    ),
    tag = "courses"
)]
#[tracing::instrument(skip(state))]
pub async fn get_course_handler(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> WebResult<impl IntoResponse> {
    let query = CourseQuery::from_pairs(query.map(|Query(pairs)| pairs).unwrap_or_default());
    let id = query.id().ok_or_else(WebError::course_id_required)?;

    let course = load_course(state.store(), id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(course))))
}

#[utoipa::path(
    get,
    path = "/api/get-courses",
    description = "List every published course, newest first. Modules are not embedded",
    responses(
        (status = 200, description = "Published courses", body = DataResponse<CourseCatalogue>),
        (status = 500, description = "Store failure", body = ErrorResponse),
    ),
    tag = "courses"
)]
#[tracing::instrument(skip(state))]
pub async fn get_courses_handler(State(state): State<AppState>) -> WebResult<impl IntoResponse> {
    let courses = state
        .store()
        .published_courses()
        .await
        .map_err(WebError::catalogue_fetch_error)?;

    Ok((StatusCode::OK, Json(DataResponse::new(CourseCatalogue(courses)))))
}

/// Course lookup followed by the module lookup. The second read only runs
/// once the first has found a published course.
pub async fn load_course(store: &dyn CourseStore, id: &str) -> WebResult<CourseWithModules> {
    let Ok(course_id) = Uuid::parse_str(id) else {
        tracing::debug!("course id `{}` is not a uuid", id);
        return Err(WebError::course_not_found());
    };

    let course = match store.find_published_course(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => return Err(WebError::course_not_found()),
        Err(e) => {
            log_error(&e);
            return Err(WebError::course_not_found());
        }
    };

    let modules = store
        .published_modules(course_id)
        .await
        .map_err(|e| WebError::course_fetch_error(Module::get_resource_type(), e))?;

    Ok(CourseWithModules::new(course, modules))
}

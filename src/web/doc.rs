use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::web::routes::courses::get_course_handler,
        crate::web::routes::courses::get_courses_handler,
    ),
    tags(
        (name = "courses", description = "Read-only access to published course content")
    ),
)]
pub struct ApiDoc;

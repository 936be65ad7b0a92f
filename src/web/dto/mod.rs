pub mod courses;
pub use courses::{CourseCatalogue, CourseWithModules, DataResponse};

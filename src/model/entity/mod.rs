mod course;
pub use course::{Course, CourseCreate};

mod module;
pub use module::{Module, ModuleCreate, ModuleWithLessons, ModuleWithLessonsRow};

mod lesson;
pub use lesson::{Lesson, LessonCreate};

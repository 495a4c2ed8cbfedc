mod course;
mod ids;
mod lecture;
mod section;
pub mod seed;

pub use course::{Course, CourseError};
pub use ids::{LectureId, SectionId};
pub use lecture::{Lecture, LectureKind};
pub use section::Section;
pub use seed::{CourseSeed, LectureSeed, SectionSeed, SeedError};

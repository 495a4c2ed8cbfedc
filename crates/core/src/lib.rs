#![forbid(unsafe_code)]

pub mod duration;
pub mod model;
pub mod state;

pub use model::{
    Course, CourseError, CourseSeed, Lecture, LectureId, LectureKind, Section, SectionId,
    SeedError,
};
pub use state::{ExpansionState, LecturePath, SelectionState};

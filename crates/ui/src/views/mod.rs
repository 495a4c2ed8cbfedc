mod content;
mod course;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use content::CourseContent;
pub use course::CourseView;
pub use state::{AddLectureMode, AddSectionMode, LectureDraft, SectionEditMode};

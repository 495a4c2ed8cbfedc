mod course_vm;
mod toast_vm;

pub use course_vm::{CourseMetaVm, LectureRowVm, SectionVm, map_course_meta, map_sections};
pub use toast_vm::{MAX_TOASTS, ToastVm, map_toasts, queue_toasts};

//! Shared error types for the services crate.

use thiserror::Error;

use course_core::{CourseError, SectionId};

/// Errors emitted by `CourseEditor`.
///
/// The display text is the line shown to the user.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EditorError {
    #[error("Section title cannot be empty")]
    EmptySectionTitle,
    #[error("Lecture title cannot be empty")]
    EmptyLectureTitle,
    #[error("Lecture duration cannot be empty")]
    EmptyLectureDuration,
    #[error("Section not found")]
    SectionNotFound(SectionId),
    #[error(transparent)]
    Course(CourseError),
}

impl EditorError {
    pub(crate) fn for_section(err: CourseError) -> Self {
        match err {
            CourseError::EmptyTitle => Self::EmptySectionTitle,
            CourseError::SectionNotFound(id) => Self::SectionNotFound(id),
            other => Self::Course(other),
        }
    }

    pub(crate) fn for_lecture(err: CourseError) -> Self {
        match err {
            CourseError::EmptyTitle => Self::EmptyLectureTitle,
            CourseError::EmptyDuration => Self::EmptyLectureDuration,
            CourseError::SectionNotFound(id) => Self::SectionNotFound(id),
            other => Self::Course(other),
        }
    }

    /// True when the user's input was rejected, false for a stale reference.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        match self {
            Self::EmptySectionTitle | Self::EmptyLectureTitle | Self::EmptyLectureDuration => true,
            Self::SectionNotFound(_) => false,
            Self::Course(err) => err.is_validation(),
        }
    }
}

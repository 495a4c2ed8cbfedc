use serde::{Deserialize, Serialize};

use crate::model::ids::LectureId;

/// What a lecture delivers when played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LectureKind {
    #[default]
    Video,
    Document,
}

impl LectureKind {
    #[must_use]
    pub fn from_is_video(is_video: bool) -> Self {
        if is_video { Self::Video } else { Self::Document }
    }

    #[must_use]
    pub fn is_video(self) -> bool {
        matches!(self, Self::Video)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Document => "Document",
        }
    }
}

/// A single lecture inside a section.
///
/// Lectures are created and mutated only through [`crate::Course`], which
/// keeps the owning section's aggregates in step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lecture {
    id: LectureId,
    title: String,
    duration: String,
    kind: LectureKind,
    completed: bool,
}

impl Lecture {
    pub(crate) fn new(
        id: LectureId,
        title: impl Into<String>,
        duration: impl Into<String>,
        kind: LectureKind,
        completed: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            duration: duration.into(),
            kind,
            completed,
        }
    }

    #[must_use]
    pub fn id(&self) -> LectureId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The duration text as authored, e.g. `"9min"`.
    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn kind(&self) -> LectureKind {
        self.kind
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub(crate) fn toggle_completed(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

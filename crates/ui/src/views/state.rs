//! Editing-mode state for the content editor, separate from the course tree.

use course_core::{LectureKind, SectionId};
use services::EditorIntent;

/// Whether a section header shows its title or a rename field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SectionEditMode {
    #[default]
    Viewing,
    Renaming { section: SectionId, draft: String },
}

impl SectionEditMode {
    #[must_use]
    pub fn renaming(section: SectionId, current_title: impl Into<String>) -> Self {
        Self::Renaming {
            section,
            draft: current_title.into(),
        }
    }

    /// The rename draft, when `section` is the one being renamed.
    #[must_use]
    pub fn draft_for(&self, section: SectionId) -> Option<&str> {
        match self {
            Self::Renaming { section: editing, draft } if *editing == section => Some(draft),
            _ => None,
        }
    }

    pub fn set_draft(&mut self, value: String) {
        if let Self::Renaming { draft, .. } = self {
            *draft = value;
        }
    }

    #[must_use]
    pub fn intent(&self) -> Option<EditorIntent> {
        match self {
            Self::Viewing => None,
            Self::Renaming { section, draft } => Some(EditorIntent::RenameSection {
                section: *section,
                title: draft.clone(),
            }),
        }
    }
}

/// The add-section form at the bottom of the content list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AddSectionMode {
    #[default]
    Closed,
    Open { draft: String },
}

impl AddSectionMode {
    #[must_use]
    pub fn open() -> Self {
        Self::Open {
            draft: String::new(),
        }
    }

    #[must_use]
    pub fn draft(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::Open { draft } => Some(draft),
        }
    }

    pub fn set_draft(&mut self, value: String) {
        if let Self::Open { draft } = self {
            *draft = value;
        }
    }

    #[must_use]
    pub fn intent(&self) -> Option<EditorIntent> {
        self.draft().map(|title| EditorIntent::AddSection {
            title: title.to_owned(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LectureDraft {
    pub title: String,
    pub duration: String,
    pub kind: LectureKind,
}

/// The add-lecture form; at most one section shows it at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AddLectureMode {
    #[default]
    Closed,
    Open {
        section: SectionId,
        draft: LectureDraft,
    },
}

impl AddLectureMode {
    /// Opens a blank video-lecture form for `section`.
    #[must_use]
    pub fn open(section: SectionId) -> Self {
        Self::Open {
            section,
            draft: LectureDraft::default(),
        }
    }

    #[must_use]
    pub fn draft_for(&self, section: SectionId) -> Option<&LectureDraft> {
        match self {
            Self::Open { section: open, draft } if *open == section => Some(draft),
            _ => None,
        }
    }

    pub fn edit(&mut self, update: impl FnOnce(&mut LectureDraft)) {
        if let Self::Open { draft, .. } = self {
            update(draft);
        }
    }

    #[must_use]
    pub fn intent(&self) -> Option<EditorIntent> {
        match self {
            Self::Closed => None,
            Self::Open { section, draft } => Some(EditorIntent::AddLecture {
                section: *section,
                title: draft.title.clone(),
                duration: draft.duration.clone(),
                kind: draft.kind,
            }),
        }
    }
}

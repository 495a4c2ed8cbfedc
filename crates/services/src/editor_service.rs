use course_core::{LectureId, LectureKind, LecturePath, SectionId};

use crate::editor_session::EditorSession;
use crate::error::EditorError;
use crate::notify::{Notification, NotificationSink};

/// A single user action against the course content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorIntent {
    AddSection {
        title: String,
    },
    RenameSection {
        section: SectionId,
        title: String,
    },
    DeleteSection {
        section: SectionId,
    },
    AddLecture {
        section: SectionId,
        title: String,
        duration: String,
        kind: LectureKind,
    },
    DeleteLecture {
        section: SectionId,
        lecture: LectureId,
    },
    ToggleCompletion {
        section: SectionId,
        lecture: LectureId,
    },
    ToggleSection {
        section: SectionId,
    },
    SelectLecture {
        section: SectionId,
        lecture: LectureId,
    },
}

impl EditorIntent {
    fn name(&self) -> &'static str {
        match self {
            Self::AddSection { .. } => "add_section",
            Self::RenameSection { .. } => "rename_section",
            Self::DeleteSection { .. } => "delete_section",
            Self::AddLecture { .. } => "add_lecture",
            Self::DeleteLecture { .. } => "delete_lecture",
            Self::ToggleCompletion { .. } => "toggle_completion",
            Self::ToggleSection { .. } => "toggle_section",
            Self::SelectLecture { .. } => "select_lecture",
        }
    }
}

/// What an applied intent changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOutcome {
    SectionAdded(SectionId),
    SectionRenamed(SectionId),
    /// `existed` is false when the delete was a no-op.
    SectionDeleted { section: SectionId, existed: bool },
    LectureAdded(LecturePath),
    LectureDeleted { path: LecturePath, existed: bool },
    /// `completed` is `None` when the lecture was not found.
    CompletionToggled {
        path: LecturePath,
        completed: Option<bool>,
    },
    SectionToggled { section: SectionId, expanded: bool },
    LectureSelected(LecturePath),
}

impl EditorOutcome {
    fn success_message(&self) -> Option<&'static str> {
        match self {
            Self::SectionAdded(_) => Some("New section added"),
            Self::SectionRenamed(_) => Some("Section updated"),
            Self::SectionDeleted { .. } => Some("Section deleted"),
            Self::LectureAdded(_) => Some("New lecture added"),
            Self::LectureDeleted { .. } => Some("Lecture deleted"),
            Self::CompletionToggled { .. }
            | Self::SectionToggled { .. }
            | Self::LectureSelected(_) => None,
        }
    }
}

/// Validates user actions, applies them to an [`EditorSession`], and reports
/// the result to a notification sink.
#[derive(Debug, Clone, Default)]
pub struct CourseEditor<S> {
    sink: S,
}

impl<S: NotificationSink> CourseEditor<S> {
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Apply one intent. On error the session is left untouched and an error
    /// notification has been emitted.
    ///
    /// # Errors
    ///
    /// Returns `EditorError` for blank titles or durations, and for renaming
    /// or adding to a section that does not exist.
    pub fn apply(
        &mut self,
        session: &mut EditorSession,
        intent: EditorIntent,
    ) -> Result<EditorOutcome, EditorError> {
        let name = intent.name();
        match Self::dispatch(session, intent) {
            Ok(outcome) => {
                tracing::debug!(intent = name, ?outcome, "applied editor intent");
                if let Some(message) = outcome.success_message() {
                    self.sink.notify(Notification::success(message));
                }
                Ok(outcome)
            }
            Err(err) => {
                tracing::warn!(intent = name, error = %err, "rejected editor intent");
                self.sink.notify(Notification::error(err.to_string()));
                Err(err)
            }
        }
    }

    fn dispatch(
        session: &mut EditorSession,
        intent: EditorIntent,
    ) -> Result<EditorOutcome, EditorError> {
        match intent {
            EditorIntent::AddSection { title } => {
                let section = session
                    .course
                    .add_section(&title)
                    .map_err(EditorError::for_section)?;
                session.expansion.expand(section);
                Ok(EditorOutcome::SectionAdded(section))
            }
            EditorIntent::RenameSection { section, title } => {
                session
                    .course
                    .rename_section(section, &title)
                    .map_err(EditorError::for_section)?;
                Ok(EditorOutcome::SectionRenamed(section))
            }
            EditorIntent::DeleteSection { section } => {
                let existed = session.course.delete_section(section);
                if session.selection.is_within(section) {
                    session.selection.clear();
                }
                Ok(EditorOutcome::SectionDeleted { section, existed })
            }
            EditorIntent::AddLecture {
                section,
                title,
                duration,
                kind,
            } => {
                let lecture = session
                    .course
                    .add_lecture(section, &title, &duration, kind)
                    .map_err(EditorError::for_lecture)?;
                Ok(EditorOutcome::LectureAdded(LecturePath::new(section, lecture)))
            }
            EditorIntent::DeleteLecture { section, lecture } => {
                let existed = session.course.delete_lecture(section, lecture);
                if session.selection.is_active(section, lecture) {
                    session.selection.clear();
                }
                Ok(EditorOutcome::LectureDeleted {
                    path: LecturePath::new(section, lecture),
                    existed,
                })
            }
            EditorIntent::ToggleCompletion { section, lecture } => {
                let completed = session.course.toggle_completion(section, lecture);
                Ok(EditorOutcome::CompletionToggled {
                    path: LecturePath::new(section, lecture),
                    completed,
                })
            }
            EditorIntent::ToggleSection { section } => {
                let expanded = session.expansion.toggle(section);
                Ok(EditorOutcome::SectionToggled { section, expanded })
            }
            EditorIntent::SelectLecture { section, lecture } => {
                session.selection.select(section, lecture);
                Ok(EditorOutcome::LectureSelected(LecturePath::new(
                    section, lecture,
                )))
            }
        }
    }
}

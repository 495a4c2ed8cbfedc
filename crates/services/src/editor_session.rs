use course_core::{Course, CourseSeed, ExpansionState, SeedError, SelectionState};

/// Everything one interactive editing session owns.
///
/// Read access is public; mutation goes through [`crate::CourseEditor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    pub(crate) course: Course,
    pub(crate) expansion: ExpansionState,
    pub(crate) selection: SelectionState,
}

impl EditorSession {
    /// Opens a session with the first section expanded and its first
    /// lecture selected.
    #[must_use]
    pub fn new(course: Course) -> Self {
        let expansion = ExpansionState::for_course(&course);
        let selection = SelectionState::for_course(&course);
        Self {
            course,
            expansion,
            selection,
        }
    }

    /// # Errors
    ///
    /// Returns `SeedError` if the seed is inconsistent.
    pub fn from_seed(seed: CourseSeed) -> Result<Self, SeedError> {
        Course::from_seed(seed).map(Self::new)
    }

    #[must_use]
    pub fn course(&self) -> &Course {
        &self.course
    }

    #[must_use]
    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Title for the playback surface.
    #[must_use]
    pub fn now_playing(&self) -> &str {
        self.selection.resolve_title(&self.course)
    }
}

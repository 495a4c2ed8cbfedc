use crate::model::{Course, LectureId, SectionId};

/// Title reported when nothing resolvable is selected.
pub const DEFAULT_TITLE: &str = "Introduction";

/// Address of one lecture in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LecturePath {
    pub section: SectionId,
    pub lecture: LectureId,
}

impl LecturePath {
    #[must_use]
    pub fn new(section: SectionId, lecture: LectureId) -> Self {
        Self { section, lecture }
    }
}

/// The lecture currently active for playback, if any.
///
/// Selection is not validated against the tree. Use [`Self::resolve_title`]
/// to read it safely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    current: Option<LecturePath>,
}

impl SelectionState {
    /// Selects the first lecture of the first section, when there is one.
    #[must_use]
    pub fn for_course(course: &Course) -> Self {
        let current = course.sections().first().and_then(|section| {
            section
                .lectures()
                .first()
                .map(|lecture| LecturePath::new(section.id(), lecture.id()))
        });
        Self { current }
    }

    pub fn select(&mut self, section: SectionId, lecture: LectureId) {
        self.current = Some(LecturePath::new(section, lecture));
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub fn current(&self) -> Option<LecturePath> {
        self.current
    }

    #[must_use]
    pub fn is_active(&self, section: SectionId, lecture: LectureId) -> bool {
        self.current == Some(LecturePath::new(section, lecture))
    }

    /// True when the selection points into `section`.
    #[must_use]
    pub fn is_within(&self, section: SectionId) -> bool {
        self.current.is_some_and(|path| path.section == section)
    }

    /// Title of the selected lecture, or [`DEFAULT_TITLE`] when the selection
    /// is empty or no longer resolves.
    #[must_use]
    pub fn resolve_title<'a>(&self, course: &'a Course) -> &'a str {
        self.current
            .and_then(|path| course.lecture(path.section, path.lecture))
            .map_or(DEFAULT_TITLE, |lecture| lecture.title())
    }
}

use crate::duration;
use crate::model::ids::{LectureId, SectionId};
use crate::model::lecture::{Lecture, LectureKind};

/// An ordered group of lectures with derived duration and progress labels.
///
/// `duration` and `progress` are recomputed inside every lecture mutation,
/// so they can be read without a separate refresh step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    id: SectionId,
    title: String,
    lectures: Vec<Lecture>,
    duration: String,
    progress: String,
}

impl Section {
    pub(crate) fn new(id: SectionId, title: impl Into<String>) -> Self {
        Self::with_lectures(id, title, Vec::new())
    }

    pub(crate) fn with_lectures(
        id: SectionId,
        title: impl Into<String>,
        lectures: Vec<Lecture>,
    ) -> Self {
        let mut section = Self {
            id,
            title: title.into(),
            lectures,
            duration: String::new(),
            progress: String::new(),
        };
        section.recompute_duration();
        section.recompute_progress();
        section
    }

    #[must_use]
    pub fn id(&self) -> SectionId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn lectures(&self) -> &[Lecture] {
        &self.lectures
    }

    #[must_use]
    pub fn lecture(&self, id: LectureId) -> Option<&Lecture> {
        self.lectures.iter().find(|lecture| lecture.id() == id)
    }

    /// Total lecture time, e.g. `"1hr 23min"`.
    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Completion label, e.g. `"2 / 5"`.
    #[must_use]
    pub fn progress(&self) -> &str {
        &self.progress
    }

    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        duration::total_minutes(self.lectures.iter().map(Lecture::duration))
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.lectures.iter().filter(|l| l.is_completed()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lectures.is_empty()
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    /// Returns `None` without appending when no lecture id is left.
    pub(crate) fn push_lecture(
        &mut self,
        title: String,
        duration: String,
        kind: LectureKind,
    ) -> Option<LectureId> {
        let id = LectureId::next_after(self.lectures.iter().map(Lecture::id))?;
        self.lectures.push(Lecture::new(id, title, duration, kind, false));
        self.recompute_duration();
        self.recompute_progress();
        Some(id)
    }

    pub(crate) fn remove_lecture(&mut self, id: LectureId) -> bool {
        let before = self.lectures.len();
        self.lectures.retain(|lecture| lecture.id() != id);
        let removed = self.lectures.len() != before;
        self.recompute_duration();
        self.recompute_progress();
        removed
    }

    pub(crate) fn toggle_lecture(&mut self, id: LectureId) -> Option<bool> {
        let lecture = self.lectures.iter_mut().find(|lecture| lecture.id() == id)?;
        let completed = lecture.toggle_completed();
        self.recompute_progress();
        Some(completed)
    }

    fn recompute_duration(&mut self) {
        self.duration = duration::format_minutes(self.total_minutes());
    }

    fn recompute_progress(&mut self) {
        self.progress = format!("{} / {}", self.completed_count(), self.lectures.len());
    }
}

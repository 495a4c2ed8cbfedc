use thiserror::Error;

use crate::duration;
use crate::model::ids::{LectureId, SectionId};
use crate::model::lecture::{Lecture, LectureKind};
use crate::model::section::Section;
use crate::model::seed::{CourseSeed, LectureSeed, SectionSeed, SeedError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("duration cannot be empty")]
    EmptyDuration,

    #[error("section {0} not found")]
    SectionNotFound(SectionId),

    #[error("no section ids left")]
    SectionIdsExhausted,

    #[error("no lecture ids left in section {0}")]
    LectureIdsExhausted(SectionId),
}

impl CourseError {
    /// True for rejected user input, false for a missing section or an
    /// exhausted id space.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyTitle | Self::EmptyDuration)
    }
}

fn required(value: &str, err: CourseError) -> Result<String, CourseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(err);
    }
    Ok(trimmed.to_owned())
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// The course content tree: ordered sections, each owning ordered lectures.
///
/// Every mutation validates first and then applies in full, recomputing the
/// affected section's aggregates before it returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    name: String,
    duration_label: String,
    last_updated: String,
    languages: Vec<String>,
    sections: Vec<Section>,
}

impl Course {
    /// Creates an empty course with the given name and no metadata.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration_label: String::new(),
            last_updated: String::new(),
            languages: Vec::new(),
            sections: Vec::new(),
        }
    }

    /// Builds the initial tree from a seed, recomputing every aggregate.
    ///
    /// # Errors
    ///
    /// Returns `SeedError` if the seed violates id or title constraints.
    pub fn from_seed(seed: CourseSeed) -> Result<Self, SeedError> {
        seed.validate()?;
        let sections = seed
            .sections
            .into_iter()
            .map(|section| {
                let lectures = section
                    .lectures
                    .into_iter()
                    .map(|lecture| {
                        Lecture::new(
                            lecture.id,
                            lecture.title.trim(),
                            lecture.duration.trim(),
                            LectureKind::from_is_video(lecture.is_video),
                            lecture.is_completed,
                        )
                    })
                    .collect();
                Section::with_lectures(section.id, section.title.trim(), lectures)
            })
            .collect();

        Ok(Self {
            name: seed.name,
            duration_label: seed.duration,
            last_updated: seed.last_updated,
            languages: seed.languages,
            sections,
        })
    }

    /// Snapshot of the current tree, aggregates included.
    #[must_use]
    pub fn to_seed(&self) -> CourseSeed {
        CourseSeed {
            name: self.name.clone(),
            duration: self.duration_label.clone(),
            last_updated: self.last_updated.clone(),
            languages: self.languages.clone(),
            sections: self
                .sections
                .iter()
                .map(|section| SectionSeed {
                    id: section.id(),
                    title: section.title().to_owned(),
                    lectures: section
                        .lectures()
                        .iter()
                        .map(|lecture| LectureSeed {
                            id: lecture.id(),
                            title: lecture.title().to_owned(),
                            duration: lecture.duration().to_owned(),
                            is_video: lecture.kind().is_video(),
                            is_completed: lecture.is_completed(),
                        })
                        .collect(),
                    duration: Some(section.duration().to_owned()),
                    progress: Some(section.progress().to_owned()),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Course length as advertised by the seed, e.g. `"3 hours"`.
    #[must_use]
    pub fn duration_label(&self) -> &str {
        &self.duration_label
    }

    #[must_use]
    pub fn last_updated(&self) -> &str {
        &self.last_updated
    }

    #[must_use]
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|section| section.id() == id)
    }

    #[must_use]
    pub fn lecture(&self, section: SectionId, lecture: LectureId) -> Option<&Lecture> {
        self.section(section)?.lecture(lecture)
    }

    /// Sum of every lecture's minutes across all sections.
    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        self.sections
            .iter()
            .map(Section::total_minutes)
            .fold(0, u32::saturating_add)
    }

    /// [`Self::total_minutes`] rendered like a section duration.
    #[must_use]
    pub fn duration(&self) -> String {
        duration::format_minutes(self.total_minutes())
    }

    fn section_mut(&mut self, id: SectionId) -> Option<&mut Section> {
        self.sections.iter_mut().find(|section| section.id() == id)
    }

    /// Appends a new, empty section.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::EmptyTitle` if the trimmed title is empty, and
    /// `CourseError::SectionIdsExhausted` once `u64::MAX` is in use.
    pub fn add_section(&mut self, title: &str) -> Result<SectionId, CourseError> {
        let title = required(title, CourseError::EmptyTitle)?;
        let id = SectionId::next_after(self.sections.iter().map(Section::id))
            .ok_or(CourseError::SectionIdsExhausted)?;
        self.sections.push(Section::new(id, title));
        Ok(id)
    }

    /// Replaces a section title in place.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::EmptyTitle` for a blank title, checked before
    /// `CourseError::SectionNotFound`.
    pub fn rename_section(&mut self, id: SectionId, title: &str) -> Result<(), CourseError> {
        let title = required(title, CourseError::EmptyTitle)?;
        let section = self
            .section_mut(id)
            .ok_or(CourseError::SectionNotFound(id))?;
        section.set_title(title);
        Ok(())
    }

    /// Removes a section. Returns `false` when it did not exist.
    pub fn delete_section(&mut self, id: SectionId) -> bool {
        let before = self.sections.len();
        self.sections.retain(|section| section.id() != id);
        self.sections.len() != before
    }

    /// Appends a lecture to a section.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::EmptyTitle` or `CourseError::EmptyDuration` for
    /// blank input (title first), then `CourseError::SectionNotFound`, and
    /// `CourseError::LectureIdsExhausted` when the section holds `u64::MAX`.
    pub fn add_lecture(
        &mut self,
        section: SectionId,
        title: &str,
        duration: &str,
        kind: LectureKind,
    ) -> Result<LectureId, CourseError> {
        let title = required(title, CourseError::EmptyTitle)?;
        let duration = required(duration, CourseError::EmptyDuration)?;
        let target = self
            .section_mut(section)
            .ok_or(CourseError::SectionNotFound(section))?;
        target
            .push_lecture(title, duration, kind)
            .ok_or(CourseError::LectureIdsExhausted(section))
    }

    /// Removes a lecture. Returns `false` when the section or lecture is absent.
    pub fn delete_lecture(&mut self, section: SectionId, lecture: LectureId) -> bool {
        self.section_mut(section)
            .is_some_and(|target| target.remove_lecture(lecture))
    }

    /// Flips a lecture's completion and returns its new state.
    ///
    /// Returns `None` without touching anything when the lecture is absent.
    pub fn toggle_completion(&mut self, section: SectionId, lecture: LectureId) -> Option<bool> {
        self.section_mut(section)?.toggle_lecture(lecture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course_with_section() -> (Course, SectionId) {
        let mut course = Course::new("Test");
        let id = course.add_section("Basics").unwrap();
        (course, id)
    }

    fn progress(course: &Course, id: SectionId) -> String {
        course.section(id).unwrap().progress().to_owned()
    }

    fn duration(course: &Course, id: SectionId) -> String {
        course.section(id).unwrap().duration().to_owned()
    }

    #[test]
    fn add_section_assigns_sequential_ids() {
        let mut course = Course::new("Test");
        assert_eq!(course.add_section("One").unwrap(), SectionId::new(1));
        assert_eq!(course.add_section("Two").unwrap(), SectionId::new(2));
        let section = course.section(SectionId::new(2)).unwrap();
        assert_eq!(section.title(), "Two");
        assert_eq!(section.duration(), "0min");
        assert_eq!(section.progress(), "0 / 0");
    }

    #[test]
    fn add_section_rejects_blank_title() {
        let (mut course, _) = course_with_section();
        let before = course.clone();
        assert_eq!(course.add_section(""), Err(CourseError::EmptyTitle));
        assert_eq!(course.add_section("   "), Err(CourseError::EmptyTitle));
        assert_eq!(course, before);
    }

    #[test]
    fn add_section_trims_title() {
        let mut course = Course::new("Test");
        let id = course.add_section("  Padded  ").unwrap();
        assert_eq!(course.section(id).unwrap().title(), "Padded");
    }

    #[test]
    fn section_ids_follow_max_after_delete() {
        let mut course = Course::new("Test");
        let first = course.add_section("One").unwrap();
        let second = course.add_section("Two").unwrap();
        assert!(course.delete_section(first));
        let third = course.add_section("Three").unwrap();
        assert!(third > second);

        assert!(course.delete_section(third));
        assert_eq!(course.add_section("Again").unwrap(), SectionId::new(3));
    }

    #[test]
    fn rename_section_replaces_title_only() {
        let (mut course, id) = course_with_section();
        course
            .add_lecture(id, "Intro", "9min", LectureKind::Video)
            .unwrap();
        course.rename_section(id, " Renamed ").unwrap();
        let section = course.section(id).unwrap();
        assert_eq!(section.title(), "Renamed");
        assert_eq!(section.duration(), "9min");
        assert_eq!(section.progress(), "0 / 1");
    }

    #[test]
    fn rename_section_errors() {
        let (mut course, id) = course_with_section();
        assert_eq!(course.rename_section(id, " "), Err(CourseError::EmptyTitle));
        let missing = SectionId::new(99);
        assert_eq!(
            course.rename_section(missing, "X"),
            Err(CourseError::SectionNotFound(missing))
        );
        // Blank title wins over a missing section.
        assert_eq!(course.rename_section(missing, ""), Err(CourseError::EmptyTitle));
        assert_eq!(course.section(id).unwrap().title(), "Basics");
    }

    #[test]
    fn delete_missing_section_is_noop() {
        let (mut course, _) = course_with_section();
        let before = course.clone();
        assert!(!course.delete_section(SectionId::new(42)));
        assert_eq!(course, before);
    }

    #[test]
    fn first_lecture_in_empty_section() {
        let (mut course, id) = course_with_section();
        let lecture = course
            .add_lecture(id, "Intro", "9min", LectureKind::Video)
            .unwrap();
        assert_eq!(lecture, LectureId::new(1));
        assert_eq!(duration(&course, id), "9min");
        assert_eq!(progress(&course, id), "0 / 1");
        let stored = course.lecture(id, lecture).unwrap();
        assert!(!stored.is_completed());
        assert_eq!(stored.kind(), LectureKind::Video);
    }

    #[test]
    fn durations_roll_over_into_hours() {
        let (mut course, id) = course_with_section();
        course.add_lecture(id, "A", "9min", LectureKind::Video).unwrap();
        course.add_lecture(id, "B", "22min", LectureKind::Video).unwrap();
        assert_eq!(duration(&course, id), "31min");
        course
            .add_lecture(id, "C", "30min", LectureKind::Document)
            .unwrap();
        assert_eq!(duration(&course, id), "1hr 1min");
    }

    #[test]
    fn add_lecture_validation_order() {
        let (mut course, id) = course_with_section();
        let missing = SectionId::new(7);
        assert_eq!(
            course.add_lecture(missing, "", "", LectureKind::Video),
            Err(CourseError::EmptyTitle)
        );
        assert_eq!(
            course.add_lecture(id, "Title", "  ", LectureKind::Video),
            Err(CourseError::EmptyDuration)
        );
        assert_eq!(
            course.add_lecture(missing, "Title", "5min", LectureKind::Video),
            Err(CourseError::SectionNotFound(missing))
        );
        assert!(course.section(id).unwrap().is_empty());
    }

    #[test]
    fn unparseable_duration_is_accepted_as_zero() {
        let (mut course, id) = course_with_section();
        course
            .add_lecture(id, "Reading", "a few pages", LectureKind::Document)
            .unwrap();
        assert_eq!(duration(&course, id), "0min");
        assert_eq!(progress(&course, id), "0 / 1");
    }

    #[test]
    fn progress_tracks_completion_through_add_and_delete() {
        let (mut course, id) = course_with_section();
        let a = course.add_lecture(id, "A", "5min", LectureKind::Video).unwrap();
        let b = course.add_lecture(id, "B", "5min", LectureKind::Video).unwrap();
        assert_eq!(course.toggle_completion(id, a), Some(true));
        assert_eq!(progress(&course, id), "1 / 2");

        course.add_lecture(id, "C", "5min", LectureKind::Video).unwrap();
        assert_eq!(progress(&course, id), "1 / 3");

        assert!(course.delete_lecture(id, b));
        assert_eq!(progress(&course, id), "1 / 2");

        assert!(course.delete_lecture(id, a));
        assert_eq!(progress(&course, id), "0 / 1");
    }

    #[test]
    fn deleting_every_lecture_resets_aggregates() {
        let (mut course, id) = course_with_section();
        let ids: Vec<_> = (1..=6)
            .map(|n| {
                course
                    .add_lecture(id, &format!("L{n}"), &format!("{}min", n * 7), LectureKind::Video)
                    .unwrap()
            })
            .collect();
        course.toggle_completion(id, ids[2]);
        for lecture in ids {
            course.delete_lecture(id, lecture);
        }
        assert_eq!(duration(&course, id), "0min");
        assert_eq!(progress(&course, id), "0 / 0");
    }

    #[test]
    fn lecture_ids_stay_unique_across_interleavings() {
        let (mut course, id) = course_with_section();
        for round in 0..5 {
            let a = course.add_lecture(id, "A", "1min", LectureKind::Video).unwrap();
            let b = course.add_lecture(id, "B", "1min", LectureKind::Video).unwrap();
            assert!(b > a);
            if round % 2 == 0 {
                course.delete_lecture(id, a);
            }
        }
        let lectures = course.section(id).unwrap().lectures();
        for pair in lectures.windows(2) {
            assert!(pair[0].id() < pair[1].id());
        }
        let mut live: Vec<_> = lectures.iter().map(Lecture::id).collect();
        live.dedup();
        assert_eq!(live.len(), lectures.len());
    }

    #[test]
    fn deleting_missing_lecture_is_noop() {
        let (mut course, id) = course_with_section();
        course.add_lecture(id, "A", "5min", LectureKind::Video).unwrap();
        let before = course.clone();
        assert!(!course.delete_lecture(id, LectureId::new(9)));
        assert!(!course.delete_lecture(SectionId::new(9), LectureId::new(1)));
        assert_eq!(course, before);
    }

    #[test]
    fn toggling_missing_lecture_is_noop() {
        let (mut course, id) = course_with_section();
        let a = course.add_lecture(id, "A", "5min", LectureKind::Video).unwrap();
        course.toggle_completion(id, a);
        let before = course.clone();
        assert_eq!(course.toggle_completion(id, LectureId::new(99)), None);
        assert_eq!(course.toggle_completion(SectionId::new(99), a), None);
        assert_eq!(progress(&course, id), "1 / 1");
        assert_eq!(course, before);
    }

    #[test]
    fn toggle_leaves_duration_alone() {
        let (mut course, id) = course_with_section();
        let a = course.add_lecture(id, "A", "45min", LectureKind::Video).unwrap();
        course.add_lecture(id, "B", "45min", LectureKind::Video).unwrap();
        course.toggle_completion(id, a);
        assert_eq!(duration(&course, id), "1hr 30min");
        assert_eq!(progress(&course, id), "1 / 2");
    }

    #[test]
    fn exhausted_ids_are_reported_instead_of_reused() {
        let json = r#"{
            "name": "Edge",
            "sections": [{
                "id": 18446744073709551615,
                "title": "Last",
                "lectures": [{ "id": 18446744073709551615, "title": "Tail", "duration": "5min" }]
            }]
        }"#;
        let mut course = Course::from_seed(CourseSeed::from_json(json).unwrap()).unwrap();
        let last = SectionId::new(u64::MAX);
        let before = course.clone();

        assert_eq!(
            course.add_section("New"),
            Err(CourseError::SectionIdsExhausted)
        );
        assert_eq!(
            course.add_lecture(last, "More", "5min", LectureKind::Video),
            Err(CourseError::LectureIdsExhausted(last))
        );
        assert!(!CourseError::SectionIdsExhausted.is_validation());
        assert_eq!(course, before);
    }

    #[test]
    fn seed_aggregates_are_recomputed() {
        let course = Course::from_seed(CourseSeed::demo()).unwrap();
        let intro = course.section(SectionId::new(1)).unwrap();
        assert_eq!(intro.duration(), "1hr 23min");
        assert_eq!(intro.progress(), "0 / 5");
        let ec2 = course.section(SectionId::new(2)).unwrap();
        assert_eq!(ec2.duration(), "45min");
        assert_eq!(course.duration(), "2hr 8min");
        assert_eq!(course.languages(), ["English", "Arabic"]);
    }

    #[test]
    fn stale_seed_labels_are_replaced() {
        let mut seed = CourseSeed::demo();
        seed.sections[0].progress = Some("5 / 5".into());
        seed.sections[0].duration = Some("10hr".into());
        seed.sections[0].lectures[0].is_completed = true;
        let course = Course::from_seed(seed).unwrap();
        let intro = course.section(SectionId::new(1)).unwrap();
        assert_eq!(intro.progress(), "1 / 5");
        assert_eq!(intro.duration(), "1hr 23min");
    }

    #[test]
    fn snapshot_carries_current_aggregates() {
        let mut course = Course::from_seed(CourseSeed::demo()).unwrap();
        let id = SectionId::new(2);
        course.toggle_completion(id, LectureId::new(1));
        let seed = course.to_seed();
        let section = seed.sections.iter().find(|s| s.id == id).unwrap();
        assert_eq!(section.progress.as_deref(), Some("1 / 5"));
        assert_eq!(section.duration.as_deref(), Some("45min"));
        assert_eq!(Course::from_seed(seed).unwrap(), course);
    }
}

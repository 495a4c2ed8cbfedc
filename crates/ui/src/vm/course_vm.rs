use course_core::{Lecture, LectureId, LectureKind, Section, SectionId};
use services::EditorSession;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LectureRowVm {
    pub section_id: SectionId,
    pub id: LectureId,
    pub label: String,
    pub duration: String,
    pub kind: LectureKind,
    pub completed: bool,
    pub active: bool,
}

impl LectureRowVm {
    #[must_use]
    pub fn dom_id(&self) -> String {
        format!("lecture-{}-{}", self.section_id, self.id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionVm {
    pub id: SectionId,
    pub title: String,
    pub heading: String,
    pub summary: String,
    pub expanded: bool,
    pub lectures: Vec<LectureRowVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseMetaVm {
    pub name: String,
    pub duration: String,
    pub last_updated: String,
    pub languages: String,
    pub content_length: String,
}

fn map_lecture(session: &EditorSession, section: SectionId, lecture: &Lecture) -> LectureRowVm {
    LectureRowVm {
        section_id: section,
        id: lecture.id(),
        label: format!("{}. {}", lecture.id(), lecture.title()),
        duration: lecture.duration().to_owned(),
        kind: lecture.kind(),
        completed: lecture.is_completed(),
        active: session.selection().is_active(section, lecture.id()),
    }
}

fn map_section(session: &EditorSession, section: &Section) -> SectionVm {
    SectionVm {
        id: section.id(),
        title: section.title().to_owned(),
        heading: format!("Section {}: {}", section.id(), section.title()),
        summary: format!("{} • {}", section.progress(), section.duration()),
        expanded: session.expansion().is_expanded(section.id()),
        lectures: section
            .lectures()
            .iter()
            .map(|lecture| map_lecture(session, section.id(), lecture))
            .collect(),
    }
}

#[must_use]
pub fn map_sections(session: &EditorSession) -> Vec<SectionVm> {
    session
        .course()
        .sections()
        .iter()
        .map(|section| map_section(session, section))
        .collect()
}

#[must_use]
pub fn map_course_meta(session: &EditorSession) -> CourseMetaVm {
    let course = session.course();
    CourseMetaVm {
        name: course.name().to_owned(),
        duration: course.duration_label().to_owned(),
        last_updated: course.last_updated().to_owned(),
        languages: course.languages().join(", "),
        content_length: course.duration(),
    }
}

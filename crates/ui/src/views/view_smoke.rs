use course_core::{Course, CourseSeed, LectureId, SectionId};
use services::{CourseEditor, EditorIntent, EditorSession, NotificationLog};

use super::test_harness::setup_course_harness;

fn demo_session() -> EditorSession {
    EditorSession::from_seed(CourseSeed::demo()).expect("demo seed")
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_smoke_renders_demo_outline() {
    let mut harness = setup_course_harness(demo_session());
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Section 1: Introduction",
        "0 / 5 • 1hr 23min",
        "Section 2: AWS EC2 Basics",
        "0 / 5 • 45min",
        "1. Introduction",
        "5. Lab Session - Intro to Management Services",
        "+ Add new lecture",
        "+ Add new section",
        "2hr 8min",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    // Only the first section starts expanded.
    assert!(!html.contains("EC2 Overview"), "collapsed section rendered: {html}");
    assert_eq!(html.matches("+ Add new lecture").count(), 1);
    assert!(html.contains("player-title"), "missing player in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_smoke_reflects_edited_session() {
    let mut session = demo_session();
    let mut editor = CourseEditor::new(NotificationLog::new());
    let ec2 = SectionId::new(2);
    for intent in [
        EditorIntent::ToggleSection { section: ec2 },
        EditorIntent::ToggleCompletion {
            section: ec2,
            lecture: LectureId::new(2),
        },
        EditorIntent::SelectLecture {
            section: ec2,
            lecture: LectureId::new(4),
        },
        EditorIntent::RenameSection {
            section: ec2,
            title: "Compute".to_string(),
        },
    ] {
        editor.apply(&mut session, intent).expect("apply intent");
    }

    let mut harness = setup_course_harness(session);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Section 2: Compute"), "missing rename in {html}");
    assert!(html.contains("1 / 5 • 45min"), "missing progress in {html}");
    assert!(html.contains("4. Security Groups"), "missing lecture in {html}");
    assert!(html.contains("lecture-row active"), "missing highlight in {html}");
    assert!(html.contains("lecture-2-4"), "missing checkbox id in {html}");
    let player = "<p class=\"player-title\">Security Groups</p>";
    assert!(html.contains(player), "missing now playing in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_smoke_dangling_selection_shows_default_title() {
    let mut session = demo_session();
    let mut editor = CourseEditor::new(NotificationLog::new());
    editor
        .apply(
            &mut session,
            EditorIntent::SelectLecture {
                section: SectionId::new(9),
                lecture: LectureId::new(9),
            },
        )
        .expect("select");

    let mut harness = setup_course_harness(session);
    harness.rebuild();
    let html = harness.render();
    let player = "<p class=\"player-title\">Introduction</p>";
    assert!(html.contains(player), "missing fallback in {html}");
    assert!(!html.contains("lecture-row active"), "unexpected highlight in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_smoke_empty_course() {
    let mut harness = setup_course_harness(EditorSession::new(Course::new("Blank")));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("+ Add new section"), "missing add button in {html}");
    assert!(!html.contains("course-section-title"), "unexpected section in {html}");
    assert!(!html.contains("class=\"toasts\""), "unexpected toasts in {html}");
}

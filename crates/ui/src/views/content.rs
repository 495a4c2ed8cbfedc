use course_core::{LectureKind, SectionId};
use dioxus::prelude::*;
use services::EditorIntent;

use crate::vm::{LectureRowVm, SectionVm};

use super::state::{AddLectureMode, AddSectionMode, SectionEditMode};

/// Collapsible section list with inline editing.
///
/// `on_intent` returns whether the intent was applied, so forms only close
/// on success.
#[component]
pub fn CourseContent(sections: Vec<SectionVm>, on_intent: Callback<EditorIntent, bool>) -> Element {
    let edit_mode = use_signal(SectionEditMode::default);
    let add_lecture = use_signal(AddLectureMode::default);
    let add_section = use_signal(AddSectionMode::default);

    rsx! {
        div { class: "course-content",
            for section in sections {
                SectionBlock {
                    key: "{section.id}",
                    section: section.clone(),
                    edit_mode,
                    add_lecture,
                    on_intent,
                }
            }
            AddSectionPanel { mode: add_section, on_intent }
        }
    }
}

#[component]
fn SectionBlock(
    section: SectionVm,
    edit_mode: Signal<SectionEditMode>,
    add_lecture: Signal<AddLectureMode>,
    on_intent: Callback<EditorIntent, bool>,
) -> Element {
    let mut edit_mode = edit_mode;
    let SectionVm {
        id: section_id,
        title,
        heading,
        summary,
        expanded,
        lectures,
    } = section;
    let draft = edit_mode.read().draft_for(section_id).map(str::to_owned);
    let is_renaming = draft.is_some();
    let draft = draft.unwrap_or_default();
    let chevron = if expanded { "▲" } else { "▼" };

    rsx! {
        div { class: "course-section",
            div { class: "course-section-header",
                div {
                    class: "course-section-trigger",
                    onclick: move |_| {
                        on_intent.call(EditorIntent::ToggleSection { section: section_id });
                    },
                    div { class: "course-section-text",
                        if is_renaming {
                            input {
                                class: "course-section-title-input",
                                value: "{draft}",
                                onclick: move |evt| evt.stop_propagation(),
                                oninput: move |evt| edit_mode.write().set_draft(evt.value()),
                            }
                        } else {
                            h3 { class: "course-section-title", "{heading}" }
                        }
                        div { class: "course-section-summary", "{summary}" }
                    }
                    span { class: "course-section-chevron", "{chevron}" }
                }
                div { class: "course-section-actions",
                    if is_renaming {
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| {
                                let intent = edit_mode.read().intent();
                                if let Some(intent) = intent {
                                    if on_intent.call(intent) {
                                        edit_mode.set(SectionEditMode::Viewing);
                                    }
                                }
                            },
                            "Save"
                        }
                    } else {
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| {
                                edit_mode.set(SectionEditMode::renaming(section_id, title.clone()));
                            },
                            "Edit"
                        }
                    }
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| {
                            on_intent.call(EditorIntent::DeleteSection { section: section_id });
                        },
                        "Delete"
                    }
                }
            }
            if expanded {
                div { class: "course-section-body",
                    for lecture in lectures {
                        LectureRow { key: "{lecture.id}", lecture: lecture.clone(), on_intent }
                    }
                    AddLecturePanel { section_id, mode: add_lecture, on_intent }
                }
            }
        }
    }
}

#[component]
fn LectureRow(lecture: LectureRowVm, on_intent: Callback<EditorIntent, bool>) -> Element {
    let section = lecture.section_id;
    let id = lecture.id;
    let dom_id = lecture.dom_id();
    let kind_label = lecture.kind.label();
    let icon = match lecture.kind {
        LectureKind::Video => "▶",
        LectureKind::Document => "▤",
    };
    let row_class = if lecture.active {
        "lecture-row active"
    } else {
        "lecture-row"
    };

    rsx! {
        div { class: "{row_class}",
            input {
                r#type: "checkbox",
                id: "{dom_id}",
                class: "lecture-check",
                checked: lecture.completed,
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_intent.call(EditorIntent::ToggleCompletion { section, lecture: id });
                },
            }
            div {
                class: "lecture-body",
                onclick: move |_| {
                    on_intent.call(EditorIntent::SelectLecture { section, lecture: id });
                },
                div { class: "lecture-title",
                    span { class: "lecture-kind", title: "{kind_label}", "{icon}" }
                    span { "{lecture.label}" }
                }
                div { class: "lecture-duration", "{lecture.duration}" }
            }
            button {
                class: "btn btn-ghost",
                r#type: "button",
                aria_label: "Delete lecture",
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_intent.call(EditorIntent::DeleteLecture { section, lecture: id });
                },
                "✕"
            }
        }
    }
}

#[component]
fn AddLecturePanel(
    section_id: SectionId,
    mode: Signal<AddLectureMode>,
    on_intent: Callback<EditorIntent, bool>,
) -> Element {
    let mut mode = mode;
    let Some(draft) = mode.read().draft_for(section_id).cloned() else {
        return rsx! {
            div { class: "add-lecture",
                button {
                    class: "btn btn-outline",
                    r#type: "button",
                    onclick: move |_| mode.set(AddLectureMode::open(section_id)),
                    "+ Add new lecture"
                }
            }
        };
    };
    let is_video = draft.kind == LectureKind::Video;

    rsx! {
        div { class: "add-lecture-form",
            label { class: "form-label", "Title" }
            input {
                class: "form-input",
                value: "{draft.title}",
                placeholder: "Enter lecture title",
                oninput: move |evt| mode.write().edit(|d| d.title = evt.value()),
            }
            label { class: "form-label", "Duration" }
            input {
                class: "form-input",
                value: "{draft.duration}",
                placeholder: "e.g. 10min",
                oninput: move |evt| mode.write().edit(|d| d.duration = evt.value()),
            }
            div { class: "lecture-kind-picker",
                span { class: "form-label", "Type" }
                button {
                    class: if is_video { "kind-option selected" } else { "kind-option" },
                    r#type: "button",
                    onclick: move |_| mode.write().edit(|d| d.kind = LectureKind::Video),
                    "Video"
                }
                button {
                    class: if is_video { "kind-option" } else { "kind-option selected" },
                    r#type: "button",
                    onclick: move |_| mode.write().edit(|d| d.kind = LectureKind::Document),
                    "Document"
                }
            }
            div { class: "form-actions",
                button {
                    class: "btn btn-outline",
                    r#type: "button",
                    onclick: move |_| mode.set(AddLectureMode::Closed),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let intent = mode.read().intent();
                        if let Some(intent) = intent {
                            if on_intent.call(intent) {
                                mode.set(AddLectureMode::Closed);
                            }
                        }
                    },
                    "Add Lecture"
                }
            }
        }
    }
}

#[component]
fn AddSectionPanel(mode: Signal<AddSectionMode>, on_intent: Callback<EditorIntent, bool>) -> Element {
    let mut mode = mode;
    let Some(draft) = mode.read().draft().map(str::to_owned) else {
        return rsx! {
            div { class: "add-section",
                button {
                    class: "btn btn-outline",
                    r#type: "button",
                    onclick: move |_| mode.set(AddSectionMode::open()),
                    "+ Add new section"
                }
            }
        };
    };

    rsx! {
        div { class: "add-section-form",
            input {
                class: "form-input",
                value: "{draft}",
                placeholder: "Enter section title",
                oninput: move |evt| mode.write().set_draft(evt.value()),
            }
            div { class: "form-actions",
                button {
                    class: "btn btn-outline",
                    r#type: "button",
                    onclick: move |_| mode.set(AddSectionMode::Closed),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let intent = mode.read().intent();
                        if let Some(intent) = intent {
                            if on_intent.call(intent) {
                                mode.set(AddSectionMode::Closed);
                            }
                        }
                    },
                    "Add Section"
                }
            }
        }
    }
}

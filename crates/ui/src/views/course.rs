use dioxus::prelude::*;
use services::{
    CourseEditor, EditorError, EditorIntent, EditorOutcome, EditorSession, Notification,
    NotificationLog,
};

use crate::context::AppContext;
use crate::vm::{CourseMetaVm, ToastVm, map_course_meta, map_sections, map_toasts, queue_toasts};

use super::content::CourseContent;

/// Runs one intent against the session and queues its notifications.
pub(crate) fn apply_intent(
    mut session: Signal<EditorSession>,
    mut toasts: Signal<Vec<Notification>>,
    intent: EditorIntent,
) -> Result<EditorOutcome, EditorError> {
    let mut editor = CourseEditor::new(NotificationLog::new());
    let result = editor.apply(&mut session.write(), intent);
    let mut log = editor.into_sink();
    queue_toasts(&mut toasts.write(), log.drain());
    result
}

#[component]
pub fn CourseView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_signal(move || ctx.initial_session());
    let mut toasts = use_signal(Vec::<Notification>::new);

    let on_intent =
        use_callback(move |intent: EditorIntent| apply_intent(session, toasts, intent).is_ok());
    let on_dismiss = use_callback(move |()| toasts.write().clear());

    let (sections, meta, now_playing) = {
        let current = session.read();
        (
            map_sections(&current),
            map_course_meta(&current),
            current.now_playing().to_owned(),
        )
    };
    let toast_items = map_toasts(&toasts.read());

    rsx! {
        div { class: "course-view",
            PlayerPanel { title: now_playing }
            div { class: "course-panel",
                CourseOverview { meta }
                h2 { class: "course-content-heading", "Course content" }
                CourseContent { sections, on_intent }
            }
            ToastList { toasts: toast_items, on_dismiss }
        }
    }
}

#[component]
fn PlayerPanel(title: String) -> Element {
    rsx! {
        div { class: "player",
            div { class: "player-stage",
                button { class: "player-play", r#type: "button", aria_label: "Play", "▶" }
                p { class: "player-title", "{title}" }
            }
        }
    }
}

#[component]
fn CourseOverview(meta: CourseMetaVm) -> Element {
    rsx! {
        dl { class: "course-overview",
            dt { "Course" }
            dd { "{meta.name}" }

            dt { "Content" }
            dd { "{meta.content_length}" }

            dt { "Last updated" }
            dd { "{meta.last_updated}" }

            dt { "Languages" }
            dd { "{meta.languages}" }
        }
    }
}

#[component]
fn ToastList(toasts: Vec<ToastVm>, on_dismiss: Callback<()>) -> Element {
    if toasts.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "toasts", role: "status",
            for (idx, toast) in toasts.into_iter().enumerate() {
                div { key: "{idx}", class: "{toast.class}", "{toast.message}" }
            }
            button {
                class: "btn btn-ghost toast-dismiss",
                r#type: "button",
                onclick: move |_| on_dismiss.call(()),
                "Dismiss"
            }
        }
    }
}

use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::EditorSession;

use crate::context::{UiApp, build_app_context};
use crate::views::CourseView;

#[derive(Clone)]
struct TestApp {
    session: EditorSession,
}

impl UiApp for TestApp {
    fn initial_session(&self) -> EditorSession {
        self.session.clone()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn CourseViewHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { CourseView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_course_harness(session: EditorSession) -> ViewHarness {
    let app = Arc::new(TestApp { session });
    let dom = VirtualDom::new_with_props(CourseViewHarness, ViewHarnessProps { app });
    ViewHarness { dom }
}

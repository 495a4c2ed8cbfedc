use std::sync::Arc;

use services::EditorSession;

pub trait UiApp: Send + Sync {
    /// The session the content editor opens with.
    fn initial_session(&self) -> EditorSession;
}

#[derive(Clone)]
pub struct AppContext {
    initial_session: EditorSession,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_session: app.initial_session(),
        }
    }

    #[must_use]
    pub fn initial_session(&self) -> EditorSession {
        self.initial_session.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

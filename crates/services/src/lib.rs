#![forbid(unsafe_code)]

pub mod editor_service;
pub mod editor_session;
pub mod error;
pub mod notify;

pub use editor_service::{CourseEditor, EditorIntent, EditorOutcome};
pub use editor_session::EditorSession;
pub use error::EditorError;
pub use notify::{Notification, NotificationLevel, NotificationLog, NotificationSink};

//! Presentation-side state kept apart from the content tree.
//!
//! Neither structure is consulted by [`crate::Course`]; ids held here may
//! refer to sections or lectures that no longer exist.

mod expansion;
mod selection;

pub use expansion::ExpansionState;
pub use selection::{DEFAULT_TITLE, LecturePath, SelectionState};

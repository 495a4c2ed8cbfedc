use std::collections::BTreeSet;

use crate::model::{Course, SectionId};

/// Which sections are currently expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: BTreeSet<SectionId>,
}

impl ExpansionState {
    /// Starts with only the first section of `course` expanded.
    #[must_use]
    pub fn for_course(course: &Course) -> Self {
        let mut state = Self::default();
        if let Some(first) = course.sections().first() {
            state.expand(first.id());
        }
        state
    }

    /// Expands a collapsed section or collapses an expanded one.
    ///
    /// Returns whether the section is expanded afterwards.
    pub fn toggle(&mut self, id: SectionId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    pub fn expand(&mut self, id: SectionId) {
        self.expanded.insert(id);
    }

    #[must_use]
    pub fn is_expanded(&self, id: SectionId) -> bool {
        self.expanded.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CourseSeed;

    #[test]
    fn starts_with_first_section_only() {
        let course = Course::from_seed(CourseSeed::demo()).unwrap();
        let state = ExpansionState::for_course(&course);
        assert!(state.is_expanded(SectionId::new(1)));
        assert!(!state.is_expanded(SectionId::new(2)));
    }

    #[test]
    fn empty_course_starts_collapsed() {
        let state = ExpansionState::for_course(&Course::new("Empty"));
        assert!(!state.is_expanded(SectionId::new(1)));
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut state = ExpansionState::default();
        let id = SectionId::new(4);
        assert!(state.toggle(id));
        assert!(state.is_expanded(id));
        assert!(!state.toggle(id));
        assert!(!state.is_expanded(id));
    }

    #[test]
    fn deleted_sections_stay_listed() {
        let mut course = Course::from_seed(CourseSeed::demo()).unwrap();
        let state = ExpansionState::for_course(&course);
        course.delete_section(SectionId::new(1));
        assert!(state.is_expanded(SectionId::new(1)));
        assert!(course.section(SectionId::new(1)).is_none());
    }
}

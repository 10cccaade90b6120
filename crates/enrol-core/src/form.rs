//! Interactive form state
//!
//! Mirrors what an applicant sees while filling the form: the current
//! values and whether the "other course" text box is shown.

use enrol_schema::{ApplicationInput, OTHER_COURSE_ID};

/// Form values plus visibility of the "other course" field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    input: ApplicationInput,
    other_visible: bool,
}

impl FormState {
    /// Empty form
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from input
    #[must_use]
    pub fn from_input(input: ApplicationInput) -> Self {
        let other_visible = input.courses_of_interest.iter().any(|c| c == OTHER_COURSE_ID);
        Self {
            input,
            other_visible,
        }
    }

    /// Current values
    #[inline]
    #[must_use]
    pub fn input(&self) -> &ApplicationInput {
        &self.input
    }

    /// Mutable values
    #[inline]
    pub fn input_mut(&mut self) -> &mut ApplicationInput {
        &mut self.input
    }

    /// Whether the "other course" text box is shown
    #[inline]
    #[must_use]
    pub fn is_other_visible(&self) -> bool {
        self.other_visible
    }

    /// Check or uncheck a course
    ///
    /// Checking adds the id once. Unchecking removes it; unchecking
    /// "other" also hides and clears its text.
    pub fn toggle_course(&mut self, id: &str, checked: bool) {
        let courses = &mut self.input.courses_of_interest;
        if checked {
            if !courses.iter().any(|c| c == id) {
                courses.push(id.to_string());
            }
        } else {
            courses.retain(|c| c != id);
        }

        if id == OTHER_COURSE_ID {
            self.other_visible = checked;
            if !checked {
                self.input.other_course = None;
            }
        }
    }

    /// Clear every value and hide the "other course" field
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checking_twice_adds_once() {
        let mut form = FormState::new();
        form.toggle_course("ai", true);
        form.toggle_course("ai", true);
        assert_eq!(form.input().courses_of_interest, vec!["ai".to_string()]);
    }

    #[test]
    fn other_shows_and_hides() {
        let mut form = FormState::new();
        form.toggle_course(OTHER_COURSE_ID, true);
        assert!(form.is_other_visible());
        form.input_mut().other_course = Some("Robótica".to_string());

        form.toggle_course(OTHER_COURSE_ID, false);
        assert!(!form.is_other_visible());
        assert_eq!(form.input().other_course, None);
        assert!(form.input().courses_of_interest.is_empty());
    }

    #[test]
    fn unchecking_other_course_keeps_other_text() {
        let mut form = FormState::new();
        form.toggle_course(OTHER_COURSE_ID, true);
        form.toggle_course("design", true);
        form.input_mut().other_course = Some("Robótica".to_string());

        form.toggle_course("design", false);
        assert!(form.is_other_visible());
        assert_eq!(form.input().other_course.as_deref(), Some("Robótica"));
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = FormState::new();
        form.input_mut().full_name = Some("Ana".to_string());
        form.toggle_course(OTHER_COURSE_ID, true);

        form.reset();
        assert_eq!(form, FormState::new());
    }
}

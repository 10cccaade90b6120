//! Course catalogue
//!
//! Courses are selected by identifier and rendered by label. The catalogue
//! keeps declaration order so lists on the form and in exports stay stable.

use serde::{Deserialize, Serialize};

/// Identifier of the free-text course entry
pub const OTHER_COURSE_ID: &str = "other";

/// A course offered by the program
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Course {
    /// Stable identifier used in form input
    pub id: String,
    /// Display name
    pub label: String,
}

impl Course {
    /// Create a course entry
    #[inline]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Whether this is the free-text "other" entry
    #[inline]
    #[must_use]
    pub fn is_other(&self) -> bool {
        self.id == OTHER_COURSE_ID
    }
}

/// Ordered set of courses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    /// Build a catalogue from courses in display order
    #[must_use]
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Find a course by identifier
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Whether an identifier is known
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Label for an identifier, if known
    #[must_use]
    pub fn label_of(&self, id: &str) -> Option<&str> {
        self.get(id).map(|c| c.label.as_str())
    }

    /// Whether the free-text entry is offered
    #[inline]
    #[must_use]
    pub fn offers_other(&self) -> bool {
        self.contains(OTHER_COURSE_ID)
    }

    /// Iterate in display order
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    /// Number of courses
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalogue is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// First identifier that appears more than once
    #[must_use]
    pub fn duplicate_id(&self) -> Option<&str> {
        self.courses.iter().enumerate().find_map(|(i, c)| {
            self.courses[..i]
                .iter()
                .any(|prev| prev.id == c.id)
                .then_some(c.id.as_str())
        })
    }
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self::new(vec![
            Course::new("design", "Design Gráfico"),
            Course::new("logic", "Lógica de Programação"),
            Course::new("ai", "Inteligência Artificial"),
            Course::new("programming", "Programação Iniciante"),
            Course::new("computer", "Curso de Informática"),
            Course::new("electronics", "Eletrônica Básica"),
            Course::new(OTHER_COURSE_ID, "Outro"),
        ])
    }
}

impl<'a> IntoIterator for &'a CourseCatalog {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses.iter()
    }
}

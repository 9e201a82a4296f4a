//! Field names and validation errors shared by the manage-course page and the
//! course form.
//!
//! Inputs in the form are identified by the same `name` strings that travel in
//! change events (`"title"`, `"authorId"`, ...). `CourseField` maps those
//! names onto the draft's fields; `FormErrors` maps an `ErrorKey` onto a
//! user-facing message.

use std::collections::BTreeMap;

/// An editable field of the course draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    Title,
    AuthorId,
    Category,
    Length,
}

impl CourseField {
    pub const fn name(self) -> &'static str {
        match self {
            CourseField::Title => "title",
            CourseField::AuthorId => "authorId",
            CourseField::Category => "category",
            CourseField::Length => "length",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(CourseField::Title),
            "authorId" => Some(CourseField::AuthorId),
            "category" => Some(CourseField::Category),
            "length" => Some(CourseField::Length),
            _ => None,
        }
    }
}

/// Key of a message in `FormErrors`. `OnSave` carries page-level save
/// failures that do not belong to any single input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKey {
    Title,
    Author,
    Category,
    OnSave,
}

/// Validation and save errors currently shown by the form.
///
/// Always replaced as a whole; never merged with a previous set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<ErrorKey, String>);

impl FormErrors {
    /// A set holding only the page-level save failure `message`.
    pub fn on_save(message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.insert(ErrorKey::OnSave, message);
        errors
    }

    pub fn insert(&mut self, key: ErrorKey, message: impl Into<String>) {
        self.0.insert(key, message.into());
    }

    pub fn get(&self, key: ErrorKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

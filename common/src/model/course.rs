use serde::{Deserialize, Serialize};

/// A course in the catalog.
///
/// The same shape travels over the wire (`camelCase` JSON) and is used by the
/// frontend as the editable draft of the manage-course form. A course that
/// has never been persisted has no `id` and usually no `slug`; the server
/// assigns both on the first save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Server-assigned identifier. `None` until the course is first saved.
    #[serde(default)]
    pub id: Option<u32>,
    pub title: String,
    /// URL-safe unique name, derived from the title by the server.
    #[serde(default)]
    pub slug: String,
    /// Reference to an `Author::id`. `None` when no author is selected or the
    /// form value could not be parsed as an integer.
    #[serde(default)]
    pub author_id: Option<u32>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub length: String,
}

impl Course {
    /// `true` when an author has been chosen. An id of `0` counts as absent.
    pub fn has_author(&self) -> bool {
        matches!(self.author_id, Some(id) if id != 0)
    }

    /// `true` once the server has assigned an id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_author_id() {
        let course: Course = serde_json::from_str(
            r#"{"id":1,"title":"Securing React Apps with Auth0","slug":"react-auth0-authentication-security","authorId":1,"category":"JavaScript"}"#,
        )
        .unwrap();

        assert_eq!(course.id, Some(1));
        assert_eq!(course.author_id, Some(1));
        assert_eq!(course.slug, "react-auth0-authentication-security");
        assert_eq!(course.length, "");
    }

    #[test]
    fn new_course_serializes_null_id_and_author() {
        let json = serde_json::to_value(Course::default()).unwrap();

        assert!(json["id"].is_null());
        assert!(json["authorId"].is_null());
        assert_eq!(json["title"], "");
    }

    #[test]
    fn zero_author_id_is_not_an_author() {
        let mut course = Course::default();
        assert!(!course.has_author());

        course.author_id = Some(0);
        assert!(!course.has_author());

        course.author_id = Some(3);
        assert!(course.has_author());
    }
}

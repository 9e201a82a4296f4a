//! State of the manage-course page.
//!
//! Everything here is free of DOM and framework calls so the page's editing,
//! validation and resync rules can be exercised directly. Side effects the
//! state asks for (reference loads) are returned as a `SyncPlan` for the
//! component to carry out after rendering.

use std::rc::Rc;

use common::model::course::Course;

use crate::components::courses::fields::{CourseField, ErrorKey, FormErrors};
use crate::router::Route;

/// Toast shown once the server has accepted a save.
pub const SAVED_MESSAGE: &str = "Course saved";

/// Loads requested by a resync pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncPlan {
    pub load_courses: bool,
    pub load_authors: bool,
}

impl SyncPlan {
    pub fn is_empty(&self) -> bool {
        !self.load_courses && !self.load_authors
    }
}

/// Main state container for `ManageCoursePage`.
pub struct ManageCoursePage {
    /// Local working copy of the course being edited. Never shared with the
    /// store; written back only through a save.
    pub draft: Course,

    /// Errors currently shown by the form.
    pub errors: FormErrors,

    /// `true` from a valid submit until the save settles.
    pub saving: bool,

    /// Loads queued by the last resync, run once the page has rendered.
    pub pending_loads: Option<SyncPlan>,
}

impl ManageCoursePage {
    /// Builds the page for its first render. The draft starts as a copy of
    /// `course` and the initial resync pass runs immediately.
    pub fn new(course: &Course, courses_loaded: bool, authors_loaded: bool) -> Self {
        let mut page = Self {
            draft: course.clone(),
            errors: FormErrors::default(),
            saving: false,
            pending_loads: None,
        };
        page.synchronize(course, courses_loaded, authors_loaded);
        page
    }

    /// Called whenever the page's inputs change. Resyncs only when the
    /// resolved target is a different `Rc` than before; an identical target
    /// leaves the draft and any in-progress edits untouched.
    ///
    /// Returns `true` when a resync pass ran.
    pub fn course_changed(
        &mut self,
        previous: &Rc<Course>,
        current: &Rc<Course>,
        courses_loaded: bool,
        authors_loaded: bool,
    ) -> bool {
        if Rc::ptr_eq(previous, current) {
            return false;
        }
        self.synchronize(current, courses_loaded, authors_loaded);
        true
    }

    /// One resync pass.
    ///
    /// While the course list is empty the target is not meaningful yet, so
    /// the draft is left alone and a course load is requested instead.
    fn synchronize(&mut self, course: &Course, courses_loaded: bool, authors_loaded: bool) {
        if courses_loaded {
            self.draft = course.clone();
        }

        let plan = SyncPlan {
            load_courses: !courses_loaded,
            load_authors: !authors_loaded,
        };
        self.pending_loads = (!plan.is_empty()).then_some(plan);
    }

    pub fn take_pending_loads(&mut self) -> Option<SyncPlan> {
        self.pending_loads.take()
    }

    /// Applies one form input change to the draft.
    ///
    /// `authorId` is parsed as a base-10 integer; anything unparsable clears
    /// the author so validation reports it. Every other field takes the raw
    /// text. Returns `false` for names that are not course fields.
    pub fn handle_field_change(&mut self, name: &str, value: String) -> bool {
        let Some(field) = CourseField::from_name(name) else {
            return false;
        };

        match field {
            CourseField::Title => self.draft.title = value,
            CourseField::AuthorId => self.draft.author_id = value.trim().parse().ok(),
            CourseField::Category => self.draft.category = value,
            CourseField::Length => self.draft.length = value,
        }
        true
    }

    /// Recomputes `errors` from scratch and returns whether the draft is valid.
    pub fn validate(&mut self) -> bool {
        let mut errors = FormErrors::default();

        if self.draft.title.is_empty() {
            errors.insert(ErrorKey::Title, "Title is required");
        }
        if !self.draft.has_author() {
            errors.insert(ErrorKey::Author, "Author is required");
        }
        if self.draft.category.is_empty() {
            errors.insert(ErrorKey::Category, "Category is required");
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    /// Starts a save. Returns the course to persist, or `None` when the draft
    /// is invalid, in which case nothing but `errors` changes.
    pub fn begin_save(&mut self) -> Option<Course> {
        if !self.validate() {
            return None;
        }
        self.saving = true;
        Some(self.draft.clone())
    }

    /// Follow-up for an accepted save: the toast to show and the route to
    /// leave for. `saving` stays set since the page is left right away.
    pub fn save_succeeded(&self) -> (&'static str, Route) {
        (SAVED_MESSAGE, Route::Courses)
    }

    /// Records a rejected save. Field errors are replaced by the single
    /// page-level message and the form becomes submittable again.
    pub fn save_failed(&mut self, message: impl Into<String>) {
        self.saving = false;
        self.errors = FormErrors::on_save(message);
    }
}

/// The page shows its loading placeholder until both reference lists have
/// been populated.
pub fn is_loading<C, A>(courses: &[C], authors: &[A]) -> bool {
    courses.is_empty() || authors.is_empty()
}

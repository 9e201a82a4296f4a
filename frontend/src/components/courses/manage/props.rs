//! Properties of the `ManageCoursePage`.
//!
//! The page receives everything it reads from the store as props, plus the
//! store handle for loads and saves and the navigation callback. Equality is
//! pointer identity throughout: a re-render with the same snapshots is not a
//! change, and a freshly loaded list is one even when its contents match.

use std::rc::Rc;

use common::model::author::Author;
use common::model::course::Course;
use yew::prelude::*;

use crate::router::Route;
use crate::store::StoreHandle;

#[derive(Properties, Clone)]
pub struct ManageCourseProps {
    /// The edit target resolved by the store for the current slug, or the
    /// shared empty template in "new course" mode.
    pub course: Rc<Course>,
    pub courses: Rc<Vec<Rc<Course>>>,
    pub authors: Rc<Vec<Author>>,
    pub store: StoreHandle,
    pub on_navigate: Callback<Route>,
}

impl PartialEq for ManageCourseProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.course, &other.course)
            && Rc::ptr_eq(&self.courses, &other.courses)
            && Rc::ptr_eq(&self.authors, &other.authors)
            && self.store == other.store
            && self.on_navigate == other.on_navigate
    }
}

impl ManageCourseProps {
    pub fn courses_loaded(&self) -> bool {
        !self.courses.is_empty()
    }

    pub fn authors_loaded(&self) -> bool {
        !self.authors.is_empty()
    }
}

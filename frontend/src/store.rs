//! Client-side catalog store.
//!
//! `CatalogState` holds the reference lists the pages read. It is owned by
//! the `App` component and only ever changed through `StoreMsg`, which the
//! loaders and the saver dispatch after a successful API call.
//!
//! Courses are kept as `Rc<Course>` so a resolved edit target keeps its
//! pointer identity for as long as the store does not replace that record.
//! The manage-course page relies on this to resync its draft exactly once
//! per distinct target.

use std::rc::Rc;

use common::model::author::Author;
use common::model::course::Course;
use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;
use yew::platform::spawn_local;
use yew::Callback;

use crate::api::{ApiError, CatalogApi};
use crate::notify::report_load_failure;

#[derive(Debug, Clone)]
pub enum StoreMsg {
    CoursesLoaded(Vec<Course>),
    AuthorsLoaded(Vec<Author>),
    CourseCreated(Course),
    CourseUpdated(Course),
}

#[derive(Debug, Clone)]
pub struct CatalogState {
    pub courses: Rc<Vec<Rc<Course>>>,
    pub authors: Rc<Vec<Author>>,
    /// Template handed out for "new course" mode and unknown slugs. Shared so
    /// that its identity is stable across re-renders.
    empty_course: Rc<Course>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            courses: Rc::new(Vec::new()),
            authors: Rc::new(Vec::new()),
            empty_course: Rc::new(Course::default()),
        }
    }
}

impl CatalogState {
    pub fn reduce(&mut self, msg: StoreMsg) {
        match msg {
            StoreMsg::CoursesLoaded(courses) => {
                self.courses = Rc::new(courses.into_iter().map(Rc::new).collect());
            }
            StoreMsg::AuthorsLoaded(authors) => {
                self.authors = Rc::new(authors);
            }
            StoreMsg::CourseCreated(course) => {
                let mut courses = self.courses.as_ref().clone();
                courses.push(Rc::new(course));
                self.courses = Rc::new(courses);
            }
            StoreMsg::CourseUpdated(course) => {
                let mut replaced = false;
                let mut courses: Vec<Rc<Course>> = self
                    .courses
                    .iter()
                    .map(|existing| {
                        if existing.id.is_some() && existing.id == course.id {
                            replaced = true;
                            Rc::new(course.clone())
                        } else {
                            Rc::clone(existing)
                        }
                    })
                    .collect();
                if !replaced {
                    courses.push(Rc::new(course));
                }
                self.courses = Rc::new(courses);
            }
        }
    }

    /// Resolves the edit target for `slug`.
    ///
    /// Returns the first course with that slug when the list is loaded and a
    /// slug was given; in every other case (new-course mode, list not loaded
    /// yet, unknown slug) the shared empty template.
    pub fn resolve_course(&self, slug: Option<&str>) -> Rc<Course> {
        slug.filter(|_| !self.courses.is_empty())
            .and_then(|slug| self.courses.iter().find(|course| course.slug == slug))
            .map(Rc::clone)
            .unwrap_or_else(|| Rc::clone(&self.empty_course))
    }
}

pub fn author_name(authors: &[Author], author_id: Option<u32>) -> Option<&str> {
    let id = author_id?;
    authors
        .iter()
        .find(|author| author.id == id)
        .map(Author::display_name)
}

/// Loader and saver operations handed to pages.
///
/// Each operation calls the API and, on success, dispatches the matching
/// `StoreMsg` before resolving, so by the time a caller sees `Ok(())` the
/// store update has been queued.
#[derive(Clone)]
pub struct StoreHandle {
    api: Rc<dyn CatalogApi>,
    dispatch: Callback<StoreMsg>,
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.api, &other.api) && self.dispatch == other.dispatch
    }
}

impl StoreHandle {
    pub fn new(api: Rc<dyn CatalogApi>, dispatch: Callback<StoreMsg>) -> Self {
        Self { api, dispatch }
    }

    pub fn load_courses(&self) -> LocalBoxFuture<'static, Result<(), ApiError>> {
        let fetch = self.api.fetch_courses();
        let dispatch = self.dispatch.clone();
        async move {
            let courses = fetch.await?;
            dispatch.emit(StoreMsg::CoursesLoaded(courses));
            Ok(())
        }
        .boxed_local()
    }

    pub fn load_authors(&self) -> LocalBoxFuture<'static, Result<(), ApiError>> {
        let fetch = self.api.fetch_authors();
        let dispatch = self.dispatch.clone();
        async move {
            let authors = fetch.await?;
            dispatch.emit(StoreMsg::AuthorsLoaded(authors));
            Ok(())
        }
        .boxed_local()
    }

    pub fn save_course(&self, course: Course) -> LocalBoxFuture<'static, Result<(), ApiError>> {
        let is_update = course.is_persisted();
        let save = self.api.save_course(course);
        let dispatch = self.dispatch.clone();
        async move {
            let saved = save.await?;
            dispatch.emit(if is_update {
                StoreMsg::CourseUpdated(saved)
            } else {
                StoreMsg::CourseCreated(saved)
            });
            Ok(())
        }
        .boxed_local()
    }
}

/// Runs a loader in the background. A failure is logged and alerted; the
/// load is not retried.
pub fn spawn_load(what: &'static str, load: LocalBoxFuture<'static, Result<(), ApiError>>) {
    spawn_local(settle_load(what, load, report_load_failure));
}

async fn settle_load(
    what: &'static str,
    load: LocalBoxFuture<'static, Result<(), ApiError>>,
    on_failure: impl FnOnce(&str, &ApiError),
) {
    if let Err(err) = load.await {
        on_failure(what, &err);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory `CatalogApi` used by the store and page tests.

    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    pub struct FakeCatalogApi {
        pub courses: Vec<Course>,
        pub authors: Vec<Author>,
        pub save_error: Option<String>,
        pub fetch_error: Option<String>,
        pub calls: RefCell<Vec<String>>,
    }

    impl CatalogApi for FakeCatalogApi {
        fn fetch_courses(&self) -> LocalBoxFuture<'static, Result<Vec<Course>, ApiError>> {
            self.calls.borrow_mut().push("fetch_courses".to_string());
            let result = match &self.fetch_error {
                Some(message) => Err(ApiError::Network(message.clone())),
                None => Ok(self.courses.clone()),
            };
            async move { result }.boxed_local()
        }

        fn fetch_authors(&self) -> LocalBoxFuture<'static, Result<Vec<Author>, ApiError>> {
            self.calls.borrow_mut().push("fetch_authors".to_string());
            let authors = self.authors.clone();
            async move { Ok(authors) }.boxed_local()
        }

        fn save_course(
            &self,
            mut course: Course,
        ) -> LocalBoxFuture<'static, Result<Course, ApiError>> {
            self.calls
                .borrow_mut()
                .push(format!("save_course:{}", course.title));
            let result = match &self.save_error {
                Some(message) => Err(ApiError::Status {
                    status: 409,
                    message: message.clone(),
                }),
                None => {
                    course.id.get_or_insert(100);
                    if course.slug.is_empty() {
                        course.slug = course.title.to_lowercase().replace(' ', "-");
                    }
                    Ok(course)
                }
            };
            async move { result }.boxed_local()
        }
    }

    pub fn course(id: u32, title: &str, slug: &str) -> Course {
        Course {
            id: Some(id),
            title: title.to_string(),
            slug: slug.to_string(),
            author_id: Some(1),
            category: "JavaScript".to_string(),
            length: String::new(),
        }
    }

    pub fn authors() -> Vec<Author> {
        vec![
            Author {
                id: 1,
                name: "Cory House".to_string(),
            },
            Author {
                id: 2,
                name: "Scott Allen".to_string(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::testing::{authors, course, FakeCatalogApi};
    use super::*;

    fn loaded_state() -> CatalogState {
        let mut state = CatalogState::default();
        state.reduce(StoreMsg::CoursesLoaded(vec![
            course(1, "React Fundamentals", "reactjs-fundamentals"),
            course(2, "Clean Code", "writing-clean-code-humans"),
        ]));
        state.reduce(StoreMsg::AuthorsLoaded(authors()));
        state
    }

    #[test]
    fn resolves_matching_slug() {
        let state = loaded_state();

        let resolved = state.resolve_course(Some("reactjs-fundamentals"));

        assert_eq!(resolved.title, "React Fundamentals");
        assert!(Rc::ptr_eq(&resolved, &state.courses[0]));
    }

    #[test]
    fn falls_back_to_the_shared_empty_template() {
        let empty = CatalogState::default();
        let loaded = loaded_state();

        let before_load = empty.resolve_course(Some("reactjs-fundamentals"));
        let unknown = loaded.resolve_course(Some("no-such-course"));
        let new_mode = loaded.resolve_course(None);

        assert_eq!(*before_load, Course::default());
        assert_eq!(*unknown, Course::default());
        assert!(Rc::ptr_eq(&unknown, &new_mode));
        assert!(Rc::ptr_eq(&unknown, &loaded.resolve_course(None)));
    }

    #[test]
    fn update_replaces_only_the_edited_course() {
        let mut state = loaded_state();
        let untouched = Rc::clone(&state.courses[1]);
        let before = state.resolve_course(Some("reactjs-fundamentals"));

        let mut edited = (*before).clone();
        edited.title = "React Fundamentals, 2nd Edition".to_string();
        state.reduce(StoreMsg::CourseUpdated(edited));

        let after = state.resolve_course(Some("reactjs-fundamentals"));
        assert!(!Rc::ptr_eq(&before, &after));
        assert_eq!(after.title, "React Fundamentals, 2nd Edition");
        assert!(Rc::ptr_eq(&untouched, &state.courses[1]));
        assert_eq!(state.courses.len(), 2);
    }

    #[test]
    fn created_course_is_appended() {
        let mut state = loaded_state();

        state.reduce(StoreMsg::CourseCreated(course(3, "Rust", "rust")));

        assert_eq!(state.courses.len(), 3);
        assert_eq!(state.resolve_course(Some("rust")).id, Some(3));
    }

    #[test]
    fn author_name_lookup() {
        let state = loaded_state();

        assert_eq!(author_name(&state.authors, Some(2)), Some("Scott Allen"));
        assert_eq!(author_name(&state.authors, Some(9)), None);
        assert_eq!(author_name(&state.authors, None), None);
    }

    fn recording_handle(api: Rc<FakeCatalogApi>) -> (StoreHandle, Rc<RefCell<Vec<StoreMsg>>>) {
        let dispatched = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&dispatched);
        let handle = StoreHandle::new(
            api,
            Callback::from(move |msg: StoreMsg| sink.borrow_mut().push(msg)),
        );
        (handle, dispatched)
    }

    #[tokio::test]
    async fn loaders_dispatch_fetched_lists() {
        let api = Rc::new(FakeCatalogApi {
            courses: vec![course(1, "React Fundamentals", "reactjs-fundamentals")],
            authors: authors(),
            ..FakeCatalogApi::default()
        });
        let (handle, dispatched) = recording_handle(Rc::clone(&api));

        handle.load_courses().await.unwrap();
        handle.load_authors().await.unwrap();

        assert_eq!(*api.calls.borrow(), ["fetch_courses", "fetch_authors"]);
        let dispatched = dispatched.borrow();
        assert!(matches!(&dispatched[0], StoreMsg::CoursesLoaded(c) if c.len() == 1));
        assert!(matches!(&dispatched[1], StoreMsg::AuthorsLoaded(a) if a.len() == 2));
    }

    #[tokio::test]
    async fn save_dispatches_create_or_update() {
        let (handle, dispatched) = recording_handle(Rc::new(FakeCatalogApi::default()));

        let new_course = Course {
            title: "Rust".to_string(),
            ..Course::default()
        };
        handle.save_course(new_course).await.unwrap();
        handle
            .save_course(course(2, "Clean Code", "writing-clean-code-humans"))
            .await
            .unwrap();

        let dispatched = dispatched.borrow();
        assert!(matches!(&dispatched[0], StoreMsg::CourseCreated(c) if c.id == Some(100)));
        assert!(matches!(&dispatched[1], StoreMsg::CourseUpdated(c) if c.id == Some(2)));
    }

    #[tokio::test]
    async fn failed_save_dispatches_nothing() {
        let (handle, dispatched) = recording_handle(Rc::new(FakeCatalogApi {
            save_error: Some("Conflict".to_string()),
            ..FakeCatalogApi::default()
        }));

        let err = handle
            .save_course(course(2, "Clean Code", "writing-clean-code-humans"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Conflict");
        assert!(dispatched.borrow().is_empty());
    }

    #[tokio::test]
    async fn failed_load_is_reported_once_with_its_list_name() {
        let (handle, dispatched) = recording_handle(Rc::new(FakeCatalogApi {
            fetch_error: Some("offline".to_string()),
            ..FakeCatalogApi::default()
        }));
        let reported = RefCell::new(Vec::new());

        settle_load("courses", handle.load_courses(), |what, err| {
            reported.borrow_mut().push(format!("{what}: {err}"))
        })
        .await;
        settle_load("authors", handle.load_authors(), |what, _| {
            reported.borrow_mut().push(what.to_string())
        })
        .await;

        assert_eq!(*reported.borrow(), ["courses: Network error: offline"]);
        assert!(matches!(&dispatched.borrow()[..], [StoreMsg::AuthorsLoaded(_)]));
    }
}

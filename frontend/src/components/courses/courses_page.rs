//! Course listing page, the destination after a successful save.
//!
//! Loads whichever reference lists are still empty on first render and shows
//! the spinner until both are present, then a table of courses linking to
//! their manage page.

use std::rc::Rc;

use common::model::author::Author;
use common::model::course::Course;
use yew::prelude::*;

use crate::components::common::header::nav_link;
use crate::components::common::spinner::Spinner;
use crate::router::Route;
use crate::store::{author_name, spawn_load, StoreHandle};

#[derive(Properties, Clone)]
pub struct CoursesPageProps {
    pub courses: Rc<Vec<Rc<Course>>>,
    pub authors: Rc<Vec<Author>>,
    pub store: StoreHandle,
    pub on_navigate: Callback<Route>,
}

impl PartialEq for CoursesPageProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.courses, &other.courses)
            && Rc::ptr_eq(&self.authors, &other.authors)
            && self.store == other.store
            && self.on_navigate == other.on_navigate
    }
}

/// One rendered line of the course table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRow {
    pub slug: String,
    pub title: String,
    pub author: String,
    pub category: String,
}

pub fn course_rows(courses: &[Rc<Course>], authors: &[Author]) -> Vec<CourseRow> {
    courses
        .iter()
        .map(|course| CourseRow {
            slug: course.slug.clone(),
            title: course.title.clone(),
            author: author_name(authors, course.author_id)
                .unwrap_or_default()
                .to_string(),
            category: course.category.clone(),
        })
        .collect()
}

pub struct CoursesPage {
    /// Guard so the initial loads run only once.
    loaded: bool,
}

impl Component for CoursesPage {
    type Message = ();
    type Properties = CoursesPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { loaded: false }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if props.courses.is_empty() || props.authors.is_empty() {
            return html! { <Spinner /> };
        }

        let add_course = {
            let on_navigate = props.on_navigate.clone();
            Callback::from(move |_: MouseEvent| on_navigate.emit(Route::ManageCourse { slug: None }))
        };

        html! {
            <>
                <h2>{"Courses"}</h2>
                <button class="btn btn-primary" onclick={add_course}>{"Add Course"}</button>
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Title"}</th>
                            <th>{"Author"}</th>
                            <th>{"Category"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for course_rows(&props.courses, &props.authors).into_iter().map(|row| {
                                let route = Route::ManageCourse { slug: Some(row.slug.clone()) };
                                html! {
                                    <tr key={row.slug.clone()}>
                                        <td>{ nav_link(route, &row.title, false, &props.on_navigate) }</td>
                                        <td>{ row.author }</td>
                                        <td>{ row.category }</td>
                                    </tr>
                                }
                            })
                        }
                    </tbody>
                </table>
            </>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render || self.loaded {
            return;
        }
        self.loaded = true;

        let props = ctx.props();
        if props.courses.is_empty() {
            spawn_load("courses", props.store.load_courses());
        }
        if props.authors.is_empty() {
            spawn_load("authors", props.store.load_authors());
        }
    }
}

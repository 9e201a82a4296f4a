//! Root component.
//!
//! Owns the catalog store and the current route, and renders the page for
//! that route with the store snapshots it needs. The store handle and the
//! navigation callback are created once so pages see them as stable props.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::api::HttpCatalogApi;
use crate::components::common::header::Header;
use crate::components::courses::courses_page::CoursesPage;
use crate::components::courses::manage::ManageCoursePage;
use crate::components::home::HomePage;
use crate::components::not_found::NotFoundPage;
use crate::router::{push_route, Route};
use crate::store::{CatalogState, StoreHandle, StoreMsg};

pub enum AppMsg {
    Store(StoreMsg),
    /// Navigation requested by a page: record it in history, then show it.
    Navigate(Route),
    /// The browser moved through history (back/forward).
    RouteChanged(Route),
}

pub struct App {
    catalog: CatalogState,
    store: StoreHandle,
    route: Route,
    on_navigate: Callback<Route>,
    _popstate: Option<Closure<dyn Fn()>>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let store = StoreHandle::new(
            Rc::new(HttpCatalogApi::default()),
            ctx.link().callback(AppMsg::Store),
        );

        let popstate = web_sys::window().map(|window| {
            let link = ctx.link().clone();
            let closure = Closure::<dyn Fn()>::new(move || {
                link.send_message(AppMsg::RouteChanged(Route::current()));
            });
            window.set_onpopstate(Some(closure.as_ref().unchecked_ref()));
            closure
        });

        Self {
            catalog: CatalogState::default(),
            store,
            route: Route::current(),
            on_navigate: ctx.link().callback(AppMsg::Navigate),
            _popstate: popstate,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::Store(msg) => {
                self.catalog.reduce(msg);
                true
            }
            AppMsg::Navigate(route) => {
                push_route(&route);
                self.route = route;
                true
            }
            AppMsg::RouteChanged(route) => {
                if self.route == route {
                    return false;
                }
                self.route = route;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                <Header route={self.route.clone()} on_navigate={self.on_navigate.clone()} />
                { self.page() }
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(window) = web_sys::window() {
            window.set_onpopstate(None);
        }
    }
}

impl App {
    fn page(&self) -> Html {
        match &self.route {
            Route::Home => html! {
                <HomePage on_navigate={self.on_navigate.clone()} />
            },
            Route::Courses => html! {
                <CoursesPage
                    courses={self.catalog.courses.clone()}
                    authors={self.catalog.authors.clone()}
                    store={self.store.clone()}
                    on_navigate={self.on_navigate.clone()}
                />
            },
            Route::ManageCourse { slug } => html! {
                <ManageCoursePage
                    course={self.catalog.resolve_course(slug.as_deref())}
                    courses={self.catalog.courses.clone()}
                    authors={self.catalog.authors.clone()}
                    store={self.store.clone()}
                    on_navigate={self.on_navigate.clone()}
                />
            },
            Route::NotFound => html! { <NotFoundPage /> },
        }
    }
}

//! Minimal path router for the catalog.
//!
//! The app owns the current `Route`; pages navigate by emitting a `Route` on
//! the `on_navigate` callback they receive, which pushes a history entry and
//! re-renders. Back/forward is handled by the app's `popstate` listener.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Courses,
    /// `/course` creates a new course, `/course/{slug}` edits an existing one.
    ManageCourse { slug: Option<String> },
    NotFound,
}

impl Route {
    pub fn recognize(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["courses"] => Route::Courses,
            ["course"] => Route::ManageCourse { slug: None },
            ["course", slug] => Route::ManageCourse {
                slug: Some(slug.to_string()),
            },
            _ => Route::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Courses => "/courses".to_string(),
            Route::ManageCourse { slug: None } => "/course".to_string(),
            Route::ManageCourse { slug: Some(slug) } => format!("/course/{}", slug),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Route for the browser's current location.
    pub fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .map(|path| Route::recognize(&path))
            .unwrap_or(Route::Home)
    }
}

/// Records `route` in the session history without reloading the page.
pub fn push_route(route: &Route) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&route.to_path()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_catalog_paths() {
        assert_eq!(Route::recognize("/"), Route::Home);
        assert_eq!(Route::recognize("/courses/"), Route::Courses);
        assert_eq!(
            Route::recognize("/course"),
            Route::ManageCourse { slug: None }
        );
        assert_eq!(
            Route::recognize("/course/reactjs-fundamentals"),
            Route::ManageCourse {
                slug: Some("reactjs-fundamentals".to_string())
            }
        );
        assert_eq!(Route::recognize("/course/a/b"), Route::NotFound);
        assert_eq!(Route::recognize("/authors"), Route::NotFound);
    }

    #[test]
    fn paths_are_recognized_back() {
        for route in [
            Route::Home,
            Route::Courses,
            Route::ManageCourse { slug: None },
            Route::ManageCourse {
                slug: Some("web-components-shadow-dom".to_string()),
            },
        ] {
            assert_eq!(Route::recognize(&route.to_path()), route);
        }
    }
}

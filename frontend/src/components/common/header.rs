use yew::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub route: Route,
    pub on_navigate: Callback<Route>,
}

pub struct Header;

impl Component for Header {
    type Message = ();
    type Properties = HeaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Header
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let courses_active = matches!(
            props.route,
            Route::Courses | Route::ManageCourse { .. }
        );

        html! {
            <nav>
                { nav_link(Route::Home, "Home", props.route == Route::Home, &props.on_navigate) }
                {" | "}
                { nav_link(Route::Courses, "Courses", courses_active, &props.on_navigate) }
            </nav>
        }
    }
}

/// Anchor that navigates client-side instead of reloading the page.
pub fn nav_link(route: Route, label: &str, active: bool, on_navigate: &Callback<Route>) -> Html {
    let href = route.to_path();
    let onclick = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(route.clone());
        })
    };

    html! {
        <a {href} class={classes!(active.then_some("active"))} {onclick}>{ label.to_string() }</a>
    }
}

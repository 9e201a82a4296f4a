use yew::prelude::*;

use crate::components::common::header::nav_link;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub on_navigate: Callback<Route>,
}

pub struct HomePage;

impl Component for HomePage {
    type Message = ();
    type Properties = HomePageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        HomePage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="jumbotron">
                <h1>{"Course Catalog"}</h1>
                <p>{"Browse, add and edit the courses in the catalog."}</p>
                { nav_link(Route::Courses, "Browse courses", false, &ctx.props().on_navigate) }
            </div>
        }
    }
}

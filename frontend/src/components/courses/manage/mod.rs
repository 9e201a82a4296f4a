//! Manage-course page: create a new course or edit an existing one.
//!
//! Responsibilities
//! - Keep a local draft of the target course and resync it whenever the
//!   store resolves a different target (see `state::ManageCoursePage`).
//! - Trigger reference loads once the page has rendered, reporting failures
//!   with a blocking alert.
//! - Validate and save the draft, then toast and navigate back to the list.
//!
//! A save that settles after the page is gone reports back through a
//! destroyed `Scope`, whose messages Yew drops. Loads do not touch page state:
//! their results still reach the store and their failures are still alerted.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

use crate::store::spawn_load;

pub use messages::Msg;
pub use props::ManageCourseProps;
pub use state::ManageCoursePage;

impl Component for ManageCoursePage {
    type Message = Msg;
    type Properties = ManageCourseProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        ManageCoursePage::new(&props.course, props.courses_loaded(), props.authors_loaded())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        self.course_changed(
            &old_props.course,
            &props.course,
            props.courses_loaded(),
            props.authors_loaded(),
        );
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let Some(plan) = self.take_pending_loads() else {
            return;
        };
        let store = &ctx.props().store;

        if plan.load_courses {
            spawn_load("courses", store.load_courses());
        }
        if plan.load_authors {
            spawn_load("authors", store.load_authors());
        }
    }
}

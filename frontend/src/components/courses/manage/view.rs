use yew::prelude::*;

use crate::components::common::spinner::Spinner;
use crate::components::courses::course_form::CourseForm;

use super::messages::Msg;
use super::state::{is_loading, ManageCoursePage};

/// Spinner until both reference lists are loaded, then the course form bound
/// to the draft.
pub fn view(page: &ManageCoursePage, ctx: &Context<ManageCoursePage>) -> Html {
    let props = ctx.props();
    if is_loading(props.courses.as_slice(), props.authors.as_slice()) {
        return html! { <Spinner /> };
    }

    let link = ctx.link();
    let on_change = link.callback(|(name, value): (String, String)| Msg::FieldChanged { name, value });
    let on_save = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <CourseForm
            course={page.draft.clone()}
            errors={page.errors.clone()}
            authors={props.authors.clone()}
            {on_change}
            {on_save}
            saving={page.saving}
        />
    }
}

//! Presentational form for a course draft.
//!
//! Renders the inputs for a `Course`, the field and page-level errors, and a
//! submit button that is disabled while a save is in flight. Holds no state:
//! every change is reported through `on_change` as `(name, value)` and the
//! submit event is handed to `on_save` untouched.

use std::rc::Rc;

use common::model::author::Author;
use common::model::course::Course;
use yew::prelude::*;

use crate::components::common::select_input::{SelectInput, SelectOption};
use crate::components::common::text_input::TextInput;
use crate::components::courses::fields::{CourseField, ErrorKey, FormErrors};

#[derive(Properties, PartialEq)]
pub struct CourseFormProps {
    pub course: Course,
    pub errors: FormErrors,
    pub authors: Rc<Vec<Author>>,
    pub on_change: Callback<(String, String)>,
    pub on_save: Callback<SubmitEvent>,
    #[prop_or_default]
    pub saving: bool,
}

pub struct CourseForm;

impl Component for CourseForm {
    type Message = ();
    type Properties = CourseFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CourseForm
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let course = &props.course;
        let error = |key: ErrorKey| props.errors.get(key).map(|m| AttrValue::from(m.to_string()));
        let onsubmit = props.on_save.clone();

        html! {
            <form {onsubmit}>
                <h2>{ form_heading(course) }</h2>
                {
                    match props.errors.get(ErrorKey::OnSave) {
                        Some(message) => html! {
                            <div class="alert alert-danger" role="alert">{ message.to_string() }</div>
                        },
                        None => html! {},
                    }
                }
                <TextInput
                    name={CourseField::Title.name()}
                    label="Title"
                    value={course.title.clone()}
                    on_change={props.on_change.clone()}
                    error={error(ErrorKey::Title)}
                />
                <SelectInput
                    name={CourseField::AuthorId.name()}
                    label="Author"
                    value={course.author_id.map(|id| id.to_string()).unwrap_or_default()}
                    default_option="Select Author"
                    options={author_options(&props.authors)}
                    on_change={props.on_change.clone()}
                    error={error(ErrorKey::Author)}
                />
                <TextInput
                    name={CourseField::Category.name()}
                    label="Category"
                    value={course.category.clone()}
                    on_change={props.on_change.clone()}
                    error={error(ErrorKey::Category)}
                />
                <TextInput
                    name={CourseField::Length.name()}
                    label="Length"
                    placeholder="h:mm"
                    value={course.length.clone()}
                    on_change={props.on_change.clone()}
                />
                <button type="submit" disabled={props.saving} class="btn btn-primary">
                    { submit_label(props.saving) }
                </button>
            </form>
        }
    }
}

fn form_heading(course: &Course) -> &'static str {
    if course.is_persisted() {
        "Edit Course"
    } else {
        "Add Course"
    }
}

fn submit_label(saving: bool) -> &'static str {
    if saving {
        "Saving..."
    } else {
        "Save"
    }
}

fn author_options(authors: &[Author]) -> Vec<SelectOption> {
    authors
        .iter()
        .map(|author| SelectOption {
            value: author.id.to_string().into(),
            text: author.display_name().to_string().into(),
        })
        .collect()
}

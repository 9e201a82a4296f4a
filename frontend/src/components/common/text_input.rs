use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextInputProps {
    /// Field name reported with every change, e.g. `"title"`.
    pub name: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    /// Emits `(name, value)` on every keystroke.
    pub on_change: Callback<(String, String)>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

pub struct TextInput;

impl Component for TextInput {
    type Message = ();
    type Properties = TextInputProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TextInput
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let oninput = {
            let name = props.name.to_string();
            let on_change = props.on_change.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_change.emit((name.clone(), input.value()));
            })
        };

        html! {
            <div class="form-group">
                <label for={props.name.clone()}>{ props.label.clone() }</label>
                <input
                    type="text"
                    id={props.name.clone()}
                    name={props.name.clone()}
                    class="form-control"
                    placeholder={props.placeholder.clone()}
                    value={props.value.clone()}
                    {oninput}
                />
                {
                    match &props.error {
                        Some(error) => html! { <div class="alert alert-danger">{ error.clone() }</div> },
                        None => html! {},
                    }
                }
            </div>
        }
    }
}

use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct SelectOption {
    pub value: AttrValue,
    pub text: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct SelectInputProps {
    pub name: AttrValue,
    pub label: AttrValue,
    /// Currently selected value; empty selects the default option.
    pub value: AttrValue,
    pub default_option: AttrValue,
    pub options: Vec<SelectOption>,
    pub on_change: Callback<(String, String)>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

pub struct SelectInput;

impl Component for SelectInput {
    type Message = ();
    type Properties = SelectInputProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SelectInput
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let onchange = {
            let name = props.name.to_string();
            let on_change = props.on_change.clone();
            Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                on_change.emit((name.clone(), select.value()));
            })
        };

        html! {
            <div class="form-group">
                <label for={props.name.clone()}>{ props.label.clone() }</label>
                <select
                    id={props.name.clone()}
                    name={props.name.clone()}
                    class="form-control"
                    {onchange}
                >
                    <option value="" selected={props.value.is_empty()}>{ props.default_option.clone() }</option>
                    {
                        for props.options.iter().map(|option| html! {
                            <option
                                key={option.value.to_string()}
                                value={option.value.clone()}
                                selected={option.value == props.value}
                            >
                                { option.text.clone() }
                            </option>
                        })
                    }
                </select>
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

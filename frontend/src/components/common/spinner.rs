use yew::{html, Component, Context, Html};

/// Placeholder shown while reference data is loading.
pub struct Spinner;

impl Component for Spinner {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Spinner
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="loader" role="status" aria-label="Loading..." />
        }
    }
}

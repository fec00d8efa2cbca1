use web_sys::HtmlInputElement;
use yew::prelude::*;

use user_display::{Fetcher, HttpUserFetcher, UserDisplay, DEFAULT_BASE_URL};

#[function_component(App)]
fn app() -> Html {
    let user_id = use_state(|| AttrValue::from("1"));
    let fetcher = use_memo((), |_| Fetcher::new(HttpUserFetcher::new(DEFAULT_BASE_URL)));

    let on_id_change = {
        let user_id = user_id.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let v = input.value();
            if !v.trim().is_empty() {
                user_id.set(AttrValue::from(v));
            }
        })
    };

    html! {
        <div class="wrap">
            <UserDisplay user_id={(*user_id).clone()} fetcher={(*fetcher).clone()} />
            <div class="controls">
                <span>{ "User id: " }</span>
                <input value={(*user_id).clone()} onchange={on_id_change} />
            </div>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

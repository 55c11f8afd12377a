use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page wandered off before the draft was finished."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">{"Back to the home page"}</Link<Route>>
            <style>
                {r#"
                .not-found { padding: 8rem 0; text-align: center; color: #fff; }
                .not-found h1 { margin: 0; font-size: 4rem; }
                .not-found-link { color: #c4b5fd; }
                "#}
            </style>
        </section>
    }
}

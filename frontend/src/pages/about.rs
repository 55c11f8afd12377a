use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::ANIMATION;
use crate::content::use_site_content;
use crate::hooks::{use_in_view, use_scroll_to_top};
use crate::state::visibility::{GateMode, Threshold};
use crate::Route;

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_to_top();
    let content = use_site_content();
    let about = &content.about;
    let values = use_node_ref();
    let values_visible = use_in_view(
        values.clone(),
        Threshold::new(ANIMATION.about_values_threshold),
        GateMode::Once,
    );

    html! {
        <div class="about">
            <section class="about-hero">
                <h1>{&about.title}</h1>
                <p class="about-intro">{&about.intro}</p>
            </section>

            <section class="about-story">
                { for about.paragraphs.iter().map(|paragraph| html! { <p>{paragraph}</p> }) }
            </section>

            <section ref={values} class={classes!("about-values", "reveal", values_visible.then_some("visible"))}>
                { for about.values.iter().map(|value| html! {
                    <div class="value-card">
                        <div class="value-icon">{&value.icon}</div>
                        <h3>{&value.title}</h3>
                        <p>{&value.description}</p>
                    </div>
                }) }
            </section>

            <div class="about-cta">
                <Link<Route> to={Route::Home} classes="btn btn-primary">
                    {"See what it can do"}
                </Link<Route>>
            </div>

            <style>
                {r#"
                .about { padding: 4rem 0; color: #fff; }
                .about-hero { text-align: center; margin-bottom: 3rem; }
                .about-hero h1 { margin: 0 0 1rem; font-size: 2.5rem; font-weight: 700; }
                .about-intro { max-width: 40rem; margin: 0 auto; font-size: 1.25rem; font-weight: 300; }
                .about-story { max-width: 44rem; margin: 0 auto 3rem; line-height: 1.7; color: #e5e7eb; }
                .about-values {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    margin-bottom: 3rem;
                }
                .value-card {
                    padding: 1.5rem;
                    background: #fff;
                    border-radius: 1rem;
                    color: #111827;
                    text-align: center;
                }
                .value-icon { font-size: 2rem; margin-bottom: 0.75rem; }
                .value-card h3 { margin: 0 0 0.5rem; font-size: 1.25rem; }
                .value-card p { margin: 0; color: #4b5563; }
                .about-cta { display: flex; justify-content: center; }
                .about-cta .btn { text-decoration: none; }
                @media (min-width: 768px) {
                    .about-values { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
        </div>
    }
}

use yew::prelude::*;

use crate::components::decor::FloatingIcon;
use crate::config::ANIMATION;
use crate::content::use_site_content;
use crate::hooks::{use_in_view, use_scroll_progress};
use crate::state::motion::interpolate;
use crate::state::visibility::{GateMode, Threshold};

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let content = use_site_content();
    let section = use_node_ref();
    let progress = use_scroll_progress(section.clone());
    let visible = use_in_view(
        section.clone(),
        Threshold::new(ANIMATION.steps_threshold),
        GateMode::Once,
    );

    let fade = interpolate(progress, &[0.0, 0.2], &[0.0, 1.0]);
    let line = interpolate(progress, &[0.0, 0.5], &[0.0, 1.0]);

    html! {
        <section ref={section} class="section how-it-works">
            <FloatingIcon glyph="✂" size={16} position="top: 10%; right: 12%;" delay_secs={1.2} />
            <FloatingIcon glyph="✎" size={20} position="bottom: 20%; left: 7%;" delay_secs={2.8} />

            <div class="steps-inner" style={format!("opacity: {:.3};", fade)}>
                <h2 class="section-title">{&content.steps.title}</h2>
                <div class={classes!("steps", visible.then_some("visible"))}>
                    <div class="steps-line" style={format!("transform: scaleX({:.3});", line)}></div>
                    { for content.steps.items.iter().enumerate().map(|(i, step)| html! {
                        <div class="step" style={format!("--i: {};", i)}>
                            <div class="step-number">{i + 1}</div>
                            <div class="step-card">
                                <div class="step-icon">{&step.icon}</div>
                                <h3>{&step.title}</h3>
                                <p>{&step.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .steps {
                    position: relative;
                    display: flex;
                    justify-content: space-between;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .steps-line {
                    position: absolute;
                    top: 2rem;
                    left: 0;
                    width: 100%;
                    height: 2px;
                    background: #ddd;
                    transform-origin: left center;
                }
                .step {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    width: 25%;
                    padding: 0 0.5rem;
                    opacity: 0;
                    transform: scale(0);
                }
                .steps.visible .step {
                    opacity: 1;
                    transform: scale(1);
                    transition: opacity 0.5s, transform 0.5s cubic-bezier(0.34, 1.56, 0.64, 1);
                    transition-delay: calc(var(--i) * 0.3s);
                }
                .step-number {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 4rem;
                    height: 4rem;
                    margin-bottom: 1rem;
                    border-radius: 9999px;
                    background: #9333ea;
                    color: #fff;
                    font-size: 1.25rem;
                    font-weight: 700;
                    transition: transform 0.2s;
                }
                .step-number:hover { transform: scale(1.1); }
                .step-card {
                    padding: 0.75rem;
                    background: #fff;
                    border-radius: 0.5rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    text-align: center;
                    transition: transform 0.2s, box-shadow 0.2s;
                }
                .step-card:hover {
                    transform: translateY(-5px);
                    box-shadow: 0 10px 25px -5px rgba(0, 0, 0, 0.1);
                }
                .step-icon { margin-bottom: 0.5rem; font-size: 1.5rem; }
                .step-card h3 { margin: 0; font-size: 1.125rem; font-weight: 600; }
                .step-card p { margin: 0; font-size: 0.875rem; color: #4b5563; }
                "#}
            </style>
        </section>
    }
}

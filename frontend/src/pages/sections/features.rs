use yew::prelude::*;

use crate::components::decor::FloatingIcon;
use crate::config::ANIMATION;
use crate::content::use_site_content;
use crate::hooks::use_in_view;
use crate::nav::Anchor;
use crate::state::visibility::{GateMode, Threshold};

#[function_component(KeyFeatures)]
pub fn key_features() -> Html {
    let content = use_site_content();
    let grid = use_node_ref();
    let visible = use_in_view(
        grid.clone(),
        Threshold::new(ANIMATION.features_threshold),
        GateMode::Once,
    );

    html! {
        <section id={Anchor::Features.id()} class="section features">
            <FloatingIcon glyph="✐" size={16} position="bottom: 25%; left: 12%;" delay_secs={2.3} />
            <FloatingIcon glyph="✒" size={22} position="bottom: 15%; right: 15%;" delay_secs={3.1} />
            <FloatingIcon glyph="T" size={18} position="top: 40%; left: 20%;" delay_secs={0.7} />

            <div ref={grid} class={classes!("features-inner", visible.then_some("visible"))}>
                <h2 class="section-title reveal-title">{&content.features.title}</h2>
                <div class="feature-grid">
                    { for content.features.items.iter().enumerate().map(|(i, feature)| html! {
                        <div class="feature-card" style={format!("--i: {};", i)}>
                            <div class="feature-icon">{&feature.icon}</div>
                            <h3>{&feature.title}</h3>
                            <p>{&feature.description}</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .feature-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }
                .feature-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    padding: 1.5rem;
                    background: #fff;
                    border-radius: 1rem;
                    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.6s ease, transform 0.6s ease, box-shadow 0.3s;
                    transition-delay: calc(var(--i) * 0.1s);
                }
                .feature-card:hover {
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
                }
                .feature-icon {
                    margin-bottom: 1rem;
                    padding: 0.75rem;
                    font-size: 2rem;
                    line-height: 1;
                    background: #f9fafb;
                    border-radius: 9999px;
                }
                .feature-card h3 { margin: 0 0 0.5rem; font-size: 1.25rem; font-weight: 600; }
                .feature-card p { margin: 0; color: #4b5563; }
                .reveal-title {
                    opacity: 0;
                    transform: translateY(-20px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .features-inner.visible .reveal-title,
                .features-inner.visible .feature-card {
                    opacity: 1;
                    transform: translateY(0);
                }
                .features-inner.visible .feature-card:hover { transform: scale(1.05); }
                @media (min-width: 768px) {
                    .feature-grid { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}

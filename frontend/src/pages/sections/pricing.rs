use yew::prelude::*;

use crate::components::decor::{FloatingIcon, Particles};
use crate::config::ANIMATION;
use crate::content::{use_site_content, Plan};
use crate::hooks::{use_in_view, use_scroll_progress};
use crate::nav::Anchor;
use crate::state::motion::interpolate;
use crate::state::visibility::{GateMode, Threshold};

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    plan: Plan,
    index: usize,
}

/// Each card fades up on its own the first time a fifth of it is visible.
#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let plan = &props.plan;
    let card = use_node_ref();
    let visible = use_in_view(
        card.clone(),
        Threshold::new(ANIMATION.plans_threshold),
        GateMode::Once,
    );

    html! {
        <div
            ref={card}
            class={classes!(
                "plan-card",
                plan.accent.class(),
                plan.popular.then_some("popular"),
                visible.then_some("visible")
            )}
            style={format!("--i: {};", props.index)}
        >
            if plan.popular {
                <div class="plan-badge">{"Most Popular"}</div>
            }
            <h3>{&plan.name}</h3>
            <div class="plan-price">
                <span class="amount">{&plan.price}</span>
                <span class="period">{format!("/{}", plan.period)}</span>
            </div>
            <p class="plan-description">{&plan.description}</p>
            <ul>
                { for plan.features.iter().map(|feature| html! {
                    <li><span class="check">{"✓"}</span><span>{feature}</span></li>
                }) }
            </ul>
            <button class="plan-cta">{&plan.cta}</button>
        </div>
    }
}

#[function_component(PricingPlans)]
pub fn pricing_plans() -> Html {
    let content = use_site_content();
    let section = use_node_ref();
    let progress = use_scroll_progress(section.clone());
    let fade = interpolate(progress, &[0.0, 0.2], &[0.0, 1.0]);

    html! {
        <section ref={section} id={Anchor::Pricing.id()} class="section pricing">
            <FloatingIcon glyph="✎" size={20} position="top: 10%; left: 8%;" delay_secs={0.5} />
            <FloatingIcon glyph="▤" size={18} position="bottom: 15%; right: 10%;" delay_secs={1.8} />
            <FloatingIcon glyph="✐" size={22} position="top: 25%; right: 20%;" delay_secs={1.2} />
            <Particles />

            <div class="pricing-inner" style={format!("opacity: {:.3};", fade)}>
                <h2 class="section-title tight">{&content.plans.title}</h2>
                if let Some(subtitle) = &content.plans.subtitle {
                    <p class="section-subtitle">{subtitle}</p>
                }
                <div class="plan-grid">
                    { for content.plans.items.iter().enumerate().map(|(index, plan)| html! {
                        <PlanCard plan={plan.clone()} {index} />
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .section-title.tight { margin-bottom: 1rem; }
                .section-subtitle {
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                    text-align: center;
                    color: #e5e7eb;
                }
                .plan-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    max-width: 64rem;
                    margin: 0 auto;
                }
                .plan-card {
                    position: relative;
                    padding: 1.5rem;
                    background: #fff;
                    border-top: 4px solid #e5e7eb;
                    border-radius: 0.75rem;
                    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.5s ease-out, transform 0.5s ease-out, box-shadow 0.3s;
                    transition-delay: calc(var(--i) * 0.2s);
                }
                .plan-card.visible { opacity: 1; transform: translateY(0); }
                .plan-card.visible:hover {
                    transform: translateY(-10px);
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);
                    transition-delay: 0s;
                }
                .plan-card.accent-gray { border-top-color: #e5e7eb; }
                .plan-card.accent-teal { border-top-color: #99f6e4; }
                .plan-card.accent-purple { border-top-color: #e9d5ff; }
                .plan-badge {
                    position: absolute;
                    top: -1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    padding: 0.25rem 1rem;
                    border-radius: 9999px;
                    background: #14b8a6;
                    color: #fff;
                    font-size: 0.875rem;
                    font-weight: 500;
                    white-space: nowrap;
                }
                .plan-card h3 { margin: 0 0 0.5rem; font-size: 1.5rem; font-weight: 700; }
                .plan-price { margin-bottom: 1rem; }
                .plan-price .amount { font-size: 2.25rem; font-weight: 700; }
                .plan-price .period, .plan-description { color: #4b5563; }
                .plan-description { margin: 0 0 1.5rem; }
                .plan-card ul { margin: 0 0 2rem; padding: 0; list-style: none; }
                .plan-card li { display: flex; align-items: flex-start; margin-bottom: 0.75rem; }
                .check { margin-right: 0.5rem; color: #22c55e; flex-shrink: 0; }
                .plan-cta {
                    width: 100%;
                    padding: 0.75rem;
                    border: none;
                    border-radius: 0.5rem;
                    color: #fff;
                    font-weight: 500;
                    cursor: pointer;
                    transition: transform 0.2s;
                }
                .plan-cta:hover { transform: scale(1.03); }
                .plan-cta:active { transform: scale(0.97); }
                .accent-gray .plan-cta { background: #4b5563; }
                .accent-teal .plan-cta { background: #0d9488; }
                .accent-purple .plan-cta { background: #9333ea; }
                @media (min-width: 768px) {
                    .plan-grid { grid-template-columns: repeat(3, 1fr); }
                    .plan-card.popular { margin-top: -1rem; margin-bottom: 1rem; }
                }
                "#}
            </style>
        </section>
    }
}

use web_sys::Element;
use yew::prelude::*;

use crate::components::decor::{FloatingIcon, Particles};
use crate::config::ANIMATION;
use crate::content::use_site_content;
use crate::hooks::{use_carousel, use_in_view, use_scroll_progress};
use crate::state::motion::{interpolate, pointer_offset, Bounds};
use crate::state::visibility::{GateMode, Threshold};

/// Avatars drift this many pixels at the edge of the card stack.
const PARALLAX_PX: f64 = 10.0;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let content = use_site_content();
    let items = &content.testimonials.items;
    let carousel = use_carousel(items.len(), ANIMATION.testimonial_rotation_ms);

    let stack = use_node_ref();
    let progress = use_scroll_progress(stack.clone());
    let fade = interpolate(progress, &[0.0, 0.2], &[0.0, 1.0]);
    let scale = interpolate(progress, &[0.0, 0.2], &[0.95, 1.0]);
    // The active card replays its entrance each time the stack scrolls back in.
    let in_view = use_in_view(
        stack.clone(),
        Threshold::new(ANIMATION.testimonials_threshold),
        GateMode::Replay,
    );

    let parallax = use_state(|| (0.0_f64, 0.0_f64));
    let on_mouse_move = {
        let stack = stack.clone();
        let parallax = parallax.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(element) = stack.cast::<Element>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let bounds = Bounds {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            };
            parallax.set(pointer_offset(e.client_x() as f64, e.client_y() as f64, bounds));
        })
    };
    let (dx, dy) = *parallax;
    let avatar_style = format!(
        "transform: translate({:.1}px, {:.1}px);",
        dx * PARALLAX_PX,
        dy * PARALLAX_PX
    );

    html! {
        <section class="section testimonials">
            <FloatingIcon glyph="✏" size={18} position="top: 15%; right: 10%;" delay_secs={1.4} />
            <FloatingIcon glyph="≡" size={22} position="bottom: 25%; left: 18%;" delay_secs={0.6} />
            <Particles />

            <div class="testimonials-inner" style={format!("opacity: {:.3}; transform: scale({:.3});", fade, scale)}>
                <h2 class="section-title">{&content.testimonials.title}</h2>

                <div
                    ref={stack}
                    class={classes!("testimonial-stack", in_view.then_some("in-view"))}
                    onmousemove={on_mouse_move}
                >
                    { for items.iter().enumerate().map(|(idx, testimonial)| html! {
                        <div
                            key={idx}
                            class={classes!("testimonial", (idx == carousel.active).then_some("active"))}
                            aria-hidden={(idx != carousel.active).to_string()}
                        >
                            <div class="testimonial-card">
                                <div class="testimonial-author">
                                    <div class="avatar" style={avatar_style.clone()}>
                                        {testimonial.initials()}
                                    </div>
                                    <div>
                                        <h3>{&testimonial.name}</h3>
                                        <p>{&testimonial.role}</p>
                                    </div>
                                </div>
                                <blockquote>{format!("\"{}\"", testimonial.quote)}</blockquote>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="testimonial-dots">
                    { for (0..items.len()).map(|idx| {
                        let select = carousel.select.clone();
                        html! {
                            <button
                                key={idx}
                                class={classes!("dot-nav", (idx == carousel.active).then_some("active"))}
                                aria-label={format!("Go to testimonial {}", idx + 1)}
                                onclick={Callback::from(move |_: MouseEvent| select.emit(idx))}
                            />
                        }
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .testimonial-stack {
                    position: relative;
                    max-width: 56rem;
                    height: 20rem;
                    margin: 0 auto;
                }
                .testimonial {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    opacity: 0;
                    transform: translateX(2rem);
                    pointer-events: none;
                    transition: opacity 0.7s ease-in-out, transform 0.7s ease-in-out;
                }
                .testimonial.active {
                    opacity: 1;
                    transform: translateX(0);
                    pointer-events: auto;
                }
                .testimonial-stack.in-view .testimonial.active .testimonial-card > * {
                    animation: rise 0.5s ease-out both;
                }
                .testimonial-stack.in-view .testimonial.active blockquote { animation-delay: 0.1s; }
                .testimonial-card {
                    padding: 2rem;
                    background: #fff;
                    border-radius: 0.75rem;
                    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                    transition: transform 0.2s, box-shadow 0.2s;
                }
                .testimonial-card:hover {
                    transform: translateY(-5px);
                    box-shadow: 0 10px 25px -5px rgba(0, 0, 0, 0.1);
                }
                .testimonial-author {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                    text-align: center;
                }
                .testimonial-author h3 { margin: 0; font-size: 1.25rem; font-weight: 600; }
                .testimonial-author p { margin: 0; color: #4b5563; }
                .avatar {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 5rem;
                    height: 5rem;
                    border: 4px solid #f3e8ff;
                    border-radius: 9999px;
                    background: linear-gradient(135deg, #7B2CBF, #3498db);
                    color: #fff;
                    font-size: 1.5rem;
                    font-weight: 700;
                    transition: transform 0.1s ease-out;
                }
                .testimonial-card blockquote {
                    margin: 0;
                    font-size: 1.125rem;
                    font-style: italic;
                    color: #374151;
                }
                .testimonial-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                }
                .dot-nav {
                    width: 0.75rem;
                    height: 0.75rem;
                    padding: 0;
                    border: none;
                    border-radius: 9999px;
                    background: #d1d5db;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .dot-nav.active { width: 1.5rem; background: #9333ea; }
                @media (min-width: 768px) {
                    .testimonial-author { flex-direction: row; text-align: left; }
                    .testimonial-author .avatar { margin-right: 0.5rem; }
                }
                "#}
            </style>
        </section>
    }
}

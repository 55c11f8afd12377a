use yew::prelude::*;

use crate::components::decor::Particles;
use crate::content::use_site_content;

#[function_component(CtaSection)]
pub fn cta_section() -> Html {
    let content = use_site_content();
    let cta = &content.cta;

    html! {
        <section class="section cta">
            <Particles />
            <div class="cta-inner">
                <h2>{&cta.title}</h2>
                <p class="cta-body">{&cta.body}</p>
                <button class="cta-button">
                    <span>{&cta.button}</span>
                    <div class="cta-shine"></div>
                </button>
                <p class="cta-note">{&cta.note}</p>
            </div>
            <style>
                {r#"
                .cta-inner {
                    position: relative;
                    z-index: 10;
                    max-width: 48rem;
                    margin: 0 auto;
                    text-align: center;
                    color: #fff;
                }
                .cta-inner h2 { margin: 0 0 1.5rem; font-size: 2.25rem; font-weight: 700; }
                .cta-body { margin: 0 0 2rem; font-size: 1.125rem; color: #f3e8ff; }
                .cta-button {
                    position: relative;
                    overflow: hidden;
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #fff;
                    color: #6b21a8;
                    font-size: 1.125rem;
                    font-weight: 700;
                    cursor: pointer;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
                    transition: box-shadow 0.3s;
                }
                .cta-button:hover { box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.3); }
                .cta-button span { position: relative; z-index: 10; }
                .cta-shine {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to right, transparent, rgba(243, 232, 255, 0.3), transparent);
                    transform: translateX(-100%);
                }
                .cta-button:hover .cta-shine { animation: wave 1s ease-in-out; }
                .cta-note { margin-top: 1rem; font-size: 0.875rem; color: #e9d5ff; }
                @keyframes wave {
                    from { transform: translateX(-100%); }
                    to { transform: translateX(100%); }
                }
                "#}
            </style>
        </section>
    }
}

use yew::prelude::*;

use crate::components::decor::FloatingIcon;
use crate::config::ANIMATION;
use crate::content::use_site_content;
use crate::hooks::{use_scroll_progress, use_text_revealer};
use crate::state::motion::interpolate;

#[function_component(LiveDemo)]
pub fn live_demo() -> Html {
    let content = use_site_content();
    let demo = &content.demo;
    let typed = use_text_revealer(
        AttrValue::from(demo.text.clone()),
        ANIMATION.type_delay_ms,
        ANIMATION.settle_delay_ms,
    );

    let panel = use_node_ref();
    let progress = use_scroll_progress(panel.clone());
    let lift = interpolate(progress, &[0.0, 1.0], &[100.0, -50.0]);
    let fade = interpolate(progress, &[0.0, 0.2], &[0.0, 1.0]);

    html! {
        <section class="section live-demo">
            <FloatingIcon glyph="¶" size={24} position="top: 5%; left: 22%;" delay_secs={1.8} />
            <FloatingIcon glyph="▦" size={20} position="top: 25%; right: 18%;" delay_secs={0.9} />
            <FloatingIcon glyph="🤖" size={22} position="bottom: 15%; left: 28%;" delay_secs={2.5} />

            <div
                ref={panel}
                class="demo-inner"
                style={format!("opacity: {:.3}; transform: translateY({:.1}px);", fade, lift)}
            >
                <h2 class="section-title">{&demo.title}</h2>

                <div class="demo-window">
                    <div class="demo-editor">
                        <div class="demo-chrome">
                            <span class="dot red"></span>
                            <span class="dot yellow"></span>
                            <span class="dot green"></span>
                            <span class="demo-file">{&demo.file_name}</span>
                        </div>
                        <div class="demo-scroll">
                            {&typed.text}
                            <span class={classes!("caret", typed.complete.then_some("done"))}></span>
                        </div>
                    </div>

                    <div class="demo-preview">
                        <div class="skeleton bar"></div>
                        <div class="demo-scroll">
                            <h3>{&demo.preview_title}</h3>
                            <div class="skeleton line" style="width: 100%;"></div>
                            <div class="skeleton line" style="width: 92%;"></div>
                            <div class="skeleton line" style="width: 83%;"></div>
                            <div class="skeleton line gap" style="width: 100%;"></div>
                            <p>{&typed.text}</p>
                            <div class="skeleton line" style="width: 83%;"></div>
                            <div class="skeleton line" style="width: 92%;"></div>
                        </div>
                    </div>
                </div>

                <div class={classes!("demo-cta", typed.complete.then_some("shown"))}>
                    <button class="try-button">{&demo.cta}</button>
                </div>
            </div>

            <style>
                {r#"
                .demo-window {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    max-width: 64rem;
                    margin: 0 auto;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
                    animation: rise 0.8s 0.3s ease-out both;
                    transition: transform 0.3s;
                }
                .demo-window:hover { transform: scale(1.02); }
                .demo-editor {
                    flex: 1;
                    padding: 1.5rem;
                    background: #111827;
                    color: #fff;
                    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
                }
                .demo-preview { flex: 1; padding: 1.5rem; background: #fff; }
                .demo-chrome { display: flex; align-items: center; margin-bottom: 1rem; }
                .dot { width: 0.75rem; height: 0.75rem; margin-right: 0.5rem; border-radius: 9999px; }
                .dot.red { background: #ef4444; }
                .dot.yellow { background: #eab308; }
                .dot.green { background: #22c55e; }
                .demo-file { margin-left: 1rem; font-size: 0.875rem; color: #9ca3af; }
                .demo-scroll { height: 16rem; overflow-y: auto; }
                .demo-preview h3 { margin: 0 0 0.75rem; font-size: 1.25rem; font-weight: 700; }
                .demo-preview p { margin: 0 0 0.5rem; color: #374151; }
                .caret {
                    display: inline-block;
                    width: 0.5rem;
                    height: 1.25rem;
                    margin-left: 0.25rem;
                    vertical-align: text-bottom;
                    background: #fff;
                    animation: blink 1s steps(2, start) infinite;
                }
                .caret.done { opacity: 0; animation: none; }
                .skeleton { background: #e5e7eb; border-radius: 0.25rem; }
                .skeleton.bar { height: 1.5rem; margin-bottom: 1rem; }
                .skeleton.line { height: 0.75rem; margin-bottom: 0.5rem; }
                .skeleton.line.gap { margin-bottom: 1rem; }
                .demo-cta {
                    display: flex;
                    justify-content: center;
                    margin-top: 2rem;
                    opacity: 0;
                    transform: translateY(20px);
                    pointer-events: none;
                    transition: opacity 0.5s, transform 0.5s;
                }
                .demo-cta.shown { opacity: 1; transform: translateY(0); pointer-events: auto; }
                .try-button {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #9333ea;
                    color: #fff;
                    font-weight: 500;
                    cursor: pointer;
                    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                    transition: background 0.3s, transform 0.2s;
                }
                .try-button:hover { background: #7e22ce; transform: scale(1.05); }
                .try-button:active { transform: scale(0.95); }
                @keyframes blink { to { visibility: hidden; } }
                @media (min-width: 768px) {
                    .demo-window { flex-direction: row; }
                }
                "#}
            </style>
        </section>
    }
}

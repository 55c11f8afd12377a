use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FloatingIconProps {
    pub glyph: AttrValue,
    #[prop_or(88)]
    pub size: u32,
    /// CSS position, e.g. `"top: 25%; left: 45%;"`.
    pub position: AttrValue,
    #[prop_or_default]
    pub delay_secs: f64,
}

/// A faint writing glyph drifting in the section background.
#[function_component(FloatingIcon)]
pub fn floating_icon(props: &FloatingIconProps) -> Html {
    let style = format!(
        "{} font-size: {}px; animation-delay: {}s;",
        props.position, props.size, props.delay_secs
    );

    html! {
        <div class="floating-icon" {style} aria-hidden="true">
            {&props.glyph}
            <style>
                {r#"
                .floating-icon {
                    position: absolute;
                    color: rgba(216, 180, 254, 0.3);
                    line-height: 1;
                    pointer-events: none;
                    animation: drift 6s ease-in-out infinite;
                }
                @keyframes drift {
                    0%, 100% { transform: translateY(0) rotate(-5deg) scale(1); }
                    50% { transform: translateY(-15px) rotate(5deg) scale(1.5); }
                }
                "#}
            </style>
        </div>
    }
}

/// The three soft circles floating behind several sections.
#[function_component(Particles)]
pub fn particles() -> Html {
    html! {
        <div class="particles" aria-hidden="true">
            <div class="particle slow" style="width: 8rem; height: 8rem; top: 25%; left: 25%;"></div>
            <div class="particle" style="width: 6rem; height: 6rem; top: 33%; right: 33%;"></div>
            <div class="particle slow" style="width: 10rem; height: 10rem; bottom: 25%; right: 25%;"></div>
        </div>
    }
}

use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::components::button::{Button, ButtonVariant};
use crate::components::decor::{FloatingIcon, Particles};
use crate::content::{use_site_content, SocialPost};
use crate::state::motion::interpolate;

/// Scroll-linked pose of one preview card.
struct CardPose {
    x: f64,
    y: f64,
    rotate: f64,
    scale: f64,
    opacity: f64,
}

impl CardPose {
    fn style(&self) -> String {
        format!(
            "transform: translate({:.1}px, {:.1}px) rotate({:.2}deg) scale({:.3}); opacity: {:.3};",
            self.x, self.y, self.rotate, self.scale, self.opacity
        )
    }
}

const OPACITY_STOPS: [f64; 3] = [0.0, 100.0, 300.0];

/// The three cards fan out as the page scrolls: left card up and away, right
/// card down and away, centre card sinking and shrinking.
fn card_poses(scroll_y: f64) -> [CardPose; 3] {
    let travel = [0.0, 200.0];
    [
        CardPose {
            x: interpolate(scroll_y, &travel, &[8.0, -120.0]),
            y: interpolate(scroll_y, &travel, &[-6.0, -40.0]),
            rotate: interpolate(scroll_y, &travel, &[12.0, 18.0]),
            scale: 1.0,
            opacity: interpolate(scroll_y, &OPACITY_STOPS, &[1.0, 0.9, 1.0]),
        },
        CardPose {
            x: interpolate(scroll_y, &travel, &[-12.0, 120.0]),
            y: interpolate(scroll_y, &travel, &[8.0, 40.0]),
            rotate: interpolate(scroll_y, &travel, &[-6.0, -12.0]),
            scale: 1.0,
            opacity: interpolate(scroll_y, &OPACITY_STOPS, &[1.0, 0.9, 1.0]),
        },
        CardPose {
            x: 0.0,
            y: interpolate(scroll_y, &travel, &[0.0, 40.0]),
            rotate: interpolate(scroll_y, &[0.0, 300.0], &[3.0, 12.0]),
            scale: interpolate(scroll_y, &travel, &[1.0, 0.9]),
            opacity: interpolate(scroll_y, &OPACITY_STOPS, &[1.0, 0.95, 1.0]),
        },
    ]
}

#[derive(Properties, PartialEq)]
struct PostCardProps {
    post: SocialPost,
    style: String,
    layer: usize,
}

#[function_component(PostCard)]
fn post_card(props: &PostCardProps) -> Html {
    let post = &props.post;
    let initial = post.name.trim_start_matches('@').chars().next().unwrap_or('?');

    html! {
        <div class={classes!("post-card", format!("layer-{}", props.layer))} style={props.style.clone()}>
            <div class="post-author">
                <div class="post-avatar">{initial}</div>
                <div>
                    <div class="post-name">{&post.name}</div>
                    <div class="post-handle">{&post.handle}</div>
                </div>
            </div>
            <div class="post-media"></div>
            <div class="post-body">{&post.body}</div>
            if let Some(timestamp) = &post.timestamp {
                <div class="post-meta">{timestamp}</div>
            }
            <div class="post-meta post-stats">
                { for post.footer.iter().map(|stat| html! { <span>{stat}</span> }) }
            </div>
        </div>
    }
}

#[function_component(SocialPostsPreview)]
fn social_posts_preview() -> Html {
    let content = use_site_content();
    let (_, scroll_y) = use_window_scroll();
    let poses = card_poses(scroll_y);

    html! {
        <div class="posts-preview">
            { for content.hero.posts.iter().zip(poses.iter()).enumerate().map(|(layer, (post, pose))| html! {
                <PostCard post={post.clone()} style={pose.style()} {layer} />
            }) }
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let content = use_site_content();
    let hero = &content.hero;

    html! {
        <section class="hero">
            <Particles />
            <FloatingIcon glyph="✎" size={18} position="top: 25%; left: 45%;" />
            <FloatingIcon glyph="▤" size={20} position="top: 30%; right: 18%;" delay_secs={1.5} />
            <FloatingIcon glyph="✐" size={16} position="bottom: 45%; left: 22%;" delay_secs={2.3} />
            <FloatingIcon glyph="✒" size={22} position="bottom: 15%; right: 15%;" delay_secs={3.1} />
            <FloatingIcon glyph="T" size={18} position="top: 40%; left: 20%;" delay_secs={0.7} />

            <div class="hero-visual">
                <SocialPostsPreview />
            </div>

            <div class="hero-copy">
                <h1 class="stagger" style="--i: 0;">{&hero.headline}</h1>
                <div class="hero-tag stagger" style="--i: 1;">
                    <span class="hero-robot">{"🤖"}</span>
                    <h2>{&hero.tag}</h2>
                </div>
                <h2 class="hero-product stagger" style="--i: 2;">{&hero.product}</h2>
                <p class="hero-pitch stagger" style="--i: 3;">{&hero.pitch}</p>
                <div class="hero-actions stagger" style="--i: 4;">
                    <Button class="grow">{&hero.primary_cta}</Button>
                    <Button variant={ButtonVariant::Outline} class="grow">{&hero.secondary_cta}</Button>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 0 1.5rem;
                    overflow: hidden;
                }
                .hero-visual {
                    position: relative;
                    width: 100%;
                    margin-bottom: 2rem;
                    animation: slide-in-left 0.8s ease-out both;
                }
                .hero-copy {
                    width: 100%;
                    color: #fff;
                    text-align: center;
                }
                .hero-copy h1 {
                    margin: 0 0 1rem;
                    font-size: 2.25rem;
                    font-weight: 700;
                    line-height: 1.15;
                    letter-spacing: -0.025em;
                }
                .stagger {
                    animation: rise 0.6s ease-out both;
                    animation-delay: calc(0.3s + var(--i) * 0.2s);
                }
                .hero-tag {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1rem;
                    overflow: hidden;
                }
                .hero-tag h2 {
                    margin: 0;
                    font-size: 1.875rem;
                    color: #60a5fa;
                    animation: tag-pulse 5.5s ease-in-out infinite;
                }
                .hero-robot {
                    font-size: 2.25rem;
                    margin-right: 0.5rem;
                    animation: robot-walk 5.5s ease-in-out infinite;
                }
                .hero-product {
                    margin: 0 0 1.5rem;
                    font-size: 1.875rem;
                    font-weight: 700;
                    background: linear-gradient(to right, #60a5fa, #a855f7);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero-pitch {
                    max-width: 28rem;
                    margin: 0 auto 2rem;
                    font-size: 1.125rem;
                    font-weight: 300;
                    line-height: 1.6;
                }
                .hero-actions {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    align-items: center;
                }
                .hero-actions .btn:hover { transform: scale(1.05); }
                .btn.grow { width: 100%; }
                .posts-preview {
                    position: relative;
                    height: 24rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .post-card {
                    position: absolute;
                    width: 16rem;
                    padding: 1rem;
                    background: #fff;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
                    transition: transform 0.15s ease-out;
                }
                .post-card.layer-0 { z-index: 10; }
                .post-card.layer-1 { z-index: 20; }
                .post-card.layer-2 { z-index: 30; }
                .post-author { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 0.5rem; }
                .post-avatar {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 9999px;
                    background: var(--accent);
                    color: #fff;
                    font-weight: 700;
                    text-transform: uppercase;
                }
                .post-name { font-size: 0.875rem; font-weight: 700; }
                .post-handle, .post-meta { font-size: 0.75rem; color: #6b7280; }
                .post-media {
                    height: 8rem;
                    margin-bottom: 0.5rem;
                    border-radius: 0.5rem;
                    background: linear-gradient(135deg, #c4b5fd, #60a5fa);
                }
                .post-body { font-size: 0.75rem; color: #1f2937; }
                .post-meta { margin-top: 0.5rem; }
                .post-stats { display: flex; justify-content: space-between; }
                @keyframes slide-in-left {
                    from { transform: translateX(-100px); opacity: 0; }
                    to { transform: translateX(0); opacity: 1; }
                }
                @keyframes robot-walk {
                    0%, 55%, 100% { transform: translateX(0); }
                    22% { transform: translateX(40px); }
                }
                @keyframes tag-pulse {
                    0% { opacity: 0; transform: translateX(-20px); }
                    9%, 36% { opacity: 1; transform: translateX(0); }
                    100% { opacity: 1; }
                }
                @media (min-width: 640px) {
                    .hero-actions { flex-direction: row; justify-content: center; }
                    .btn.grow { width: auto; }
                }
                @media (min-width: 768px) {
                    .hero { flex-direction: row; padding: 6rem 1.5rem; }
                    .hero-visual { width: 50%; margin-bottom: 0; }
                    .hero-copy { width: 50%; text-align: left; }
                    .hero-copy h1 { font-size: 3rem; }
                    .hero-tag { justify-content: flex-start; }
                    .hero-tag h2 { font-size: 2.25rem; }
                    .hero-product { font-size: 3rem; }
                    .hero-pitch { margin-left: 0; font-size: 1.25rem; }
                    .hero-actions { justify-content: flex-start; }
                }
                @media (min-width: 1024px) {
                    .hero { justify-content: space-between; padding: 6rem 3rem; }
                    .hero-copy h1 { font-size: 3.75rem; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_rest_at_their_initial_pose() {
        let [left, right, centre] = card_poses(0.0);
        assert_eq!((left.x, left.y, left.rotate), (8.0, -6.0, 12.0));
        assert_eq!((right.x, right.y, right.rotate), (-12.0, 8.0, -6.0));
        assert_eq!((centre.y, centre.rotate, centre.scale), (0.0, 3.0, 1.0));
    }

    #[test]
    fn cards_fan_out_and_stop() {
        let [left, right, centre] = card_poses(1_000.0);
        assert_eq!(left.x, -120.0);
        assert_eq!(right.x, 120.0);
        assert_eq!(centre.scale, 0.9);
        assert_eq!(centre.opacity, 1.0);
    }

    #[test]
    fn opacity_never_drops_below_floor() {
        for scroll in (0..400).step_by(10) {
            let poses = card_poses(scroll as f64);
            assert!(poses.iter().all(|pose| pose.opacity >= 0.9 - 1e-9));
        }
    }
}

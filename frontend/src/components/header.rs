use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::config::MOBILE_BREAKPOINT_PX;
use crate::content::use_site_content;
use crate::dom;
use crate::hooks::{use_scroll_lock, OverlayAction};
use crate::nav::{Anchor, AnchorLink};
use crate::state::overlay::Overlay;
use crate::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let content = use_site_content();
    let menu = use_reducer(Overlay::default);
    use_scroll_lock(menu.is_open());

    // Widening past the breakpoint hides the overlay, so it must not keep
    // the page locked.
    {
        let menu = menu.dispatcher();
        use_event_with_window("resize", move |_: Event| {
            let wide = dom::window()
                .ok()
                .and_then(|window| window.inner_width().ok())
                .and_then(|width| width.as_f64())
                .map_or(false, |width| width >= MOBILE_BREAKPOINT_PX);
            if wide {
                menu.dispatch(OverlayAction::Close);
            }
        });
    }

    let toggle_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(OverlayAction::Toggle);
        })
    };

    let close_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |_: MouseEvent| {
            menu.dispatch(OverlayAction::Navigate);
        })
    };

    let overlay_class = classes!("mobile-overlay", menu.is_open().then_some("open"));

    html! {
        <>
            <header class="site-header">
                <div class="header-bar">
                    <Link<Route> to={Route::Home} classes="brand">
                        {&content.brand}
                    </Link<Route>>
                    <div class="desktop-nav">
                        <Link<Route> to={Route::Home} classes="home-link">
                            <svg xmlns="http://www.w3.org/2000/svg" class="home-icon" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                                    d="M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6" />
                            </svg>
                        </Link<Route>>
                        <nav>
                            <ul>
                                <li>
                                    <Link<Route> to={Route::About} classes="nav-link">{"About"}</Link<Route>>
                                </li>
                                <li><AnchorLink anchor={Anchor::Features} class="nav-link" /></li>
                                <li><AnchorLink anchor={Anchor::Pricing} class="nav-link" /></li>
                            </ul>
                        </nav>
                    </div>

                    <div class="header-actions">
                        <Button variant={ButtonVariant::Outline}>{"Login"}</Button>
                        <Button>{"Register"}</Button>
                    </div>

                    <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                        <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            if menu.is_open() {
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                            } else {
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                            }
                        </svg>
                    </button>
                </div>
            </header>

            <div class={overlay_class} aria-hidden={(!menu.is_open()).to_string()}>
                <nav>
                    <ul>
                        <li onclick={close_menu.clone()}>
                            <Link<Route> to={Route::About} classes="overlay-link">{"About"}</Link<Route>>
                        </li>
                        <li onclick={close_menu.clone()}>
                            <AnchorLink anchor={Anchor::Features} class="overlay-link" />
                        </li>
                        <li onclick={close_menu.clone()}>
                            <AnchorLink anchor={Anchor::Pricing} class="overlay-link" />
                        </li>
                    </ul>
                </nav>
                <div class="overlay-actions">
                    <Button variant={ButtonVariant::Outline} class="wide" onclick={close_menu.clone()}>
                        {"Login"}
                    </Button>
                    <Button class="wide" onclick={close_menu}>{"Register"}</Button>
                </div>
            </div>

            <style>
                {r#"
                .site-header {
                    position: sticky;
                    top: 0;
                    z-index: 40;
                    display: flex;
                    justify-content: center;
                    padding: 1rem 3rem;
                }
                .header-bar {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    width: 100%;
                    max-width: 80rem;
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    backdrop-filter: blur(12px);
                }
                .brand {
                    color: #fff;
                    font-weight: 500;
                    text-decoration: none;
                }
                .desktop-nav {
                    display: none;
                    align-items: center;
                    padding: 0 1rem;
                    border-radius: 0.5rem;
                    backdrop-filter: blur(12px);
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
                }
                .desktop-nav ul {
                    display: flex;
                    gap: 1.5rem;
                    list-style: none;
                    margin: 0 0 0 2rem;
                    padding: 0;
                }
                .home-link { color: #fff; display: flex; }
                .home-icon { width: 2rem; height: 2rem; }
                .nav-link {
                    color: #fff;
                    font-weight: 500;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .nav-link:hover { color: #d1d5db; }
                .header-actions { display: none; gap: 1rem; }
                .burger-menu {
                    position: relative;
                    z-index: 50;
                    width: 1.5rem;
                    height: 1.5rem;
                    padding: 0;
                    color: #fff;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .mobile-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 30;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    background: rgba(17, 24, 39, 0.9);
                    backdrop-filter: blur(24px);
                    transform: translateY(-100%);
                    transition: transform 0.3s ease-in-out;
                }
                .mobile-overlay.open { transform: translateY(0); }
                .mobile-overlay ul {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    list-style: none;
                    padding: 0 2rem;
                    text-align: center;
                }
                .overlay-link {
                    color: #fff;
                    font-size: 1.5rem;
                    font-weight: 500;
                    text-decoration: none;
                }
                .overlay-actions {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    width: 100%;
                    max-width: 20rem;
                    margin-top: 3rem;
                    padding: 0 2rem;
                }
                .btn.wide { width: 100%; }
                @media (min-width: 768px) {
                    .header-actions { display: flex; }
                    .burger-menu, .mobile-overlay { display: none; }
                }
                @media (min-width: 1024px) {
                    .site-header { padding: 1rem 0; }
                    .desktop-nav { display: flex; }
                }
                "#}
            </style>
        </>
    }
}

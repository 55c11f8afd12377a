use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::use_site_content;
use crate::nav::{Anchor, AnchorLink};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let content = use_site_content();

    html! {
        <footer class="site-footer">
            <div class="footer-top">
                <div>
                    <p class="footer-brand">{&content.brand}</p>
                    <p class="footer-tagline">{&content.footer.tagline}</p>
                </div>
                <nav class="footer-links">
                    <Link<Route> to={Route::Home} classes="footer-link">{"Home"}</Link<Route>>
                    <Link<Route> to={Route::About} classes="footer-link">{"About"}</Link<Route>>
                    <AnchorLink anchor={Anchor::Pricing} class="footer-link" />
                    <AnchorLink anchor={Anchor::Faq} class="footer-link" />
                </nav>
            </div>
            <p class="footer-copyright">{&content.footer.copyright}</p>
            <style>
                {r#"
                .site-footer {
                    padding: 3rem 0 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    color: #d1d5db;
                }
                .footer-top {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 2rem;
                }
                .footer-brand { color: #fff; font-weight: 600; margin: 0 0 0.5rem; }
                .footer-tagline { margin: 0; font-size: 0.9rem; }
                .footer-links { display: flex; gap: 1.5rem; }
                .footer-link { color: #d1d5db; text-decoration: none; }
                .footer-link:hover { color: #fff; }
                .footer-copyright { margin-top: 2rem; font-size: 0.8rem; color: #9ca3af; }
                "#}
            </style>
        </footer>
    }
}

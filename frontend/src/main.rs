use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod dom;
mod error;
mod hooks;
mod nav;
mod state {
    pub mod carousel;
    pub mod disclosure;
    pub mod motion;
    pub mod overlay;
    pub mod revealer;
    pub mod scroll_lock;
    pub mod visibility;
}
mod components {
    pub mod button;
    pub mod decor;
    pub mod footer;
    pub mod header;
    pub mod layout;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod not_found;
    pub mod sections {
        pub mod cta;
        pub mod faq;
        pub mod features;
        pub mod hero;
        pub mod how_it_works;
        pub mod live_demo;
        pub mod pricing;
        pub mod testimonials;
    }
}

use components::layout::Layout;
use content::SiteContent;
use pages::{about::About, home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let content = use_memo(
        |_| {
            content::load().map(Rc::new).map_err(|err| {
                error!("Failed to load site content: {}", err);
                err.to_string()
            })
        },
        (),
    );

    match &*content {
        Ok(content) => html! {
            <ContextProvider<Rc<SiteContent>> context={content.clone()}>
                <BrowserRouter>
                    <Layout>
                        <Switch<Route> render={switch} />
                    </Layout>
                </BrowserRouter>
            </ContextProvider<Rc<SiteContent>>>
        },
        Err(message) => html! {
            <div class="content-error" style="padding: 4rem 1rem; color: #fff; text-align: center;">
                <h1>{"Something went wrong"}</h1>
                <p>{message}</p>
            </div>
        },
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

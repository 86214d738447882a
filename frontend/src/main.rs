use log::info;
use yew::prelude::*;
use yew_hooks::use_unmount;
use yew_router::prelude::*;

mod config;
mod dom;
mod error;
mod hooks;
mod motion {
    pub mod anchor;
    pub mod counter;
    pub mod easing;
    pub mod entrance;
    pub mod frame_loop;
    pub mod parallax;
    pub mod scroll;
}
mod chat {
    pub mod sequencer;
    pub mod transcript;
}
mod components {
    pub mod anchor_link;
    pub mod chat_demo;
    pub mod fallback_image;
    pub mod nav;
    pub mod scroll_top;
    pub mod stats;
}
mod pages {
    pub mod landing;
}

use components::nav::{Nav, NavItem};
use motion::scroll::ScrollAnimator;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem { href: "#features", label: "Features" },
        NavItem { href: "#stats", label: "Results" },
        NavItem { href: "#pricing", label: "Pricing" },
        NavItem { href: "#contact", label: "Contact" },
    ]
}

#[function_component]
fn App() -> Html {
    // One animator for the whole page, so any new scroll supersedes the last.
    let animator = use_memo(|_| ScrollAnimator::new(), ());
    {
        let animator = animator.clone();
        use_unmount(move || animator.cancel());
    }
    hooks::use_page_entrance();

    html! {
        <ContextProvider<ScrollAnimator> context={(*animator).clone()}>
            <BrowserRouter>
                <Nav brand="studio" items={nav_items()} />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ScrollAnimator>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

use gloo_timers::callback::Timeout;
use log::{info, warn};
use yew::prelude::*;
use yew_hooks::use_mount;
use yew_router::prelude::*;

mod config;
mod dom;
mod error;
mod storage;
mod components {
    pub mod anchor;
    pub mod cookie_consent;
    pub mod fade_in;
    pub mod footer;
    pub mod nav;
}
mod contact {
    pub mod form;
    pub mod validation;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod services;
}

use components::{cookie_consent::CookieConsent, footer::Footer, nav::Nav};
use pages::{
    about::About,
    contact::Contact,
    home::Home,
    not_found::NotFound,
    services::Services,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/index.html")]
    Index,
    #[at("/services.html")]
    Services,
    #[at("/about.html")]
    About,
    #[at("/contact.html")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::Index => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            warn!("No page for this path");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    use_mount(|| {
        info!("Lease Legal website loaded successfully!");

        // Body starts transparent; fade it in once the first render is on screen.
        Timeout::new(config::BODY_REVEAL_DELAY_MS, || {
            if let Err(e) = dom::reveal_body() {
                warn!("Could not reveal page body: {}", e);
            }
        })
        .forget();
    });

    html! {
        <BrowserRouter>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
            <CookieConsent />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

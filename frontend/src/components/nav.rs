use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

pub struct NavLink {
    /// Page name the link points at, compared against the current URL.
    pub page: &'static str,
    pub label: &'static str,
    pub route: Route,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { page: "index.html", label: "Home", route: Route::Index },
    NavLink { page: "services.html", label: "Services", route: Route::Services },
    NavLink { page: "about.html", label: "About", route: Route::About },
    NavLink { page: "contact.html", label: "Contact", route: Route::Contact },
];

pub fn is_scrolled(offset: f64) -> bool {
    offset > config::SCROLL_THRESHOLD_PX
}

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }
}

/// Last segment of a URL path, `index.html` for directory paths.
pub fn current_page(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(page) if !page.is_empty() => page,
        _ => config::DEFAULT_PAGE,
    }
}

pub fn is_active(link_page: &str, current: &str) -> bool {
    link_page == current
}

fn contains(node: &NodeRef, target: Option<&Node>) -> bool {
    node.get().map_or(false, |n| n.contains(target))
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state_eq(MenuState::default);
    let scrolled = use_state_eq(|| false);
    let toggle_ref = use_node_ref();
    let menu_ref = use_node_ref();
    let location = use_location();

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let update = {
                    let window = window.clone();
                    move || {
                        let offset = window.scroll_y().unwrap_or(0.0);
                        scrolled.set(is_scrolled(offset));
                    }
                };
                update();

                let callback = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);
                if let Err(e) = window.add_event_listener_with_callback(
                    "scroll",
                    callback.as_ref().unchecked_ref(),
                ) {
                    error!("Failed to watch scroll position: {:?}", e);
                }
                (window, callback)
            });

            move || {
                if let Some((window, callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    // Clicks anywhere outside the toggle and the menu close the menu.
    {
        let menu = menu.clone();
        let toggle_ref = toggle_ref.clone();
        let menu_ref = menu_ref.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().and_then(|w| w.document()).map(|document| {
                let callback = Closure::wrap(Box::new(move |e: web_sys::Event| {
                    let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                    if !contains(&menu_ref, target.as_ref()) && !contains(&toggle_ref, target.as_ref()) {
                        menu.set(MenuState::closed());
                    }
                }) as Box<dyn FnMut(web_sys::Event)>);
                if let Err(e) = document.add_event_listener_with_callback(
                    "click",
                    callback.as_ref().unchecked_ref(),
                ) {
                    error!("Failed to watch outside clicks: {:?}", e);
                }
                (document, callback)
            });

            move || {
                if let Some((document, callback)) = listener {
                    let _ = document.remove_event_listener_with_callback(
                        "click",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggled());
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(MenuState::closed());
        })
    };

    let current = location
        .as_ref()
        .map(|l| current_page(l.path()).to_string())
        .unwrap_or_else(|| config::DEFAULT_PAGE.to_string());
    let open = menu.is_open();

    html! {
        <nav id="navbar" class={classes!("navbar", (*scrolled).then(|| "scrolled"))}>
            <div class="nav-container">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Lease Legal"}
                </Link<Route>>

                <ul id="navMenu" ref={menu_ref} class={classes!("nav-menu", open.then(|| "active"))}>
                    { for NAV_LINKS.iter().map(|link| {
                        let active = is_active(link.page, &current);
                        html! {
                            <li onclick={close_menu.clone()}>
                                <Link<Route>
                                    to={link.route.clone()}
                                    classes={classes!("nav-link", active.then(|| "active"))}
                                >
                                    {link.label}
                                </Link<Route>>
                            </li>
                        }
                    }) }
                </ul>

                <button
                    id="mobileMenuToggle"
                    ref={toggle_ref}
                    class={classes!("mobile-menu-toggle", open.then(|| "active"))}
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_only_past_threshold() {
        for offset in [0.0, 1.0, 49.5, 50.0] {
            assert!(!is_scrolled(offset), "offset {}", offset);
        }
        for offset in [50.5, 51.0, 600.0] {
            assert!(is_scrolled(offset), "offset {}", offset);
        }
    }

    #[test]
    fn toggling_twice_restores_state() {
        let start = MenuState::default();
        assert!(!start.is_open());
        assert!(start.toggled().is_open());
        assert_eq!(start.toggled().toggled(), start);

        let open = start.toggled();
        assert_eq!(open.toggled().toggled(), open);
    }

    #[test]
    fn closing_is_absolute() {
        assert_eq!(MenuState::default().toggled(), MenuState { open: true });
        assert!(!MenuState::closed().is_open());
    }

    #[test]
    fn current_page_uses_last_segment() {
        assert_eq!(current_page("/about.html"), "about.html");
        assert_eq!(current_page("/legal/contact.html"), "contact.html");
        assert_eq!(current_page("/"), "index.html");
        assert_eq!(current_page(""), "index.html");
        assert_eq!(current_page("/legal/"), "index.html");
    }

    #[test]
    fn exactly_one_link_is_active_per_page() {
        for path in ["/", "/index.html", "/services.html", "/about.html", "/contact.html"] {
            let current = current_page(path);
            let active: Vec<_> = NAV_LINKS
                .iter()
                .filter(|link| is_active(link.page, current))
                .map(|link| link.page)
                .collect();
            assert_eq!(active, [current], "path {}", path);
        }
    }

    #[test]
    fn unknown_page_has_no_active_link() {
        let current = current_page("/blog.html");
        assert!(NAV_LINKS.iter().all(|link| !is_active(link.page, current)));
    }
}

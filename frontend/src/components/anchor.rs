use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::dom;
use crate::error::{js_message, Result, SiteError};

/// Selector for an in-page link target. The bare `#` placeholder has none.
pub fn fragment_target(href: &str) -> Option<&str> {
    if href.starts_with('#') && href != "#" {
        Some(href)
    } else {
        None
    }
}

/// Window scroll position that leaves the target just below the fixed navbar.
pub fn scroll_target_top(offset_top: f64) -> f64 {
    offset_top - config::HEADER_OFFSET_PX
}

fn scroll_to_fragment(selector: &str) -> Result<()> {
    let target = dom::document()?
        .query_selector(selector)
        .map_err(|e| SiteError::Dom(js_message(&e)))?
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());

    match target {
        Some(target) => dom::scroll_window_to(scroll_target_top(target.offset_top() as f64)),
        None => {
            debug!("No element matches {}", selector);
            Ok(())
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(selector) = fragment_target(&href) {
                e.prevent_default();
                if let Err(err) = scroll_to_fragment(selector) {
                    warn!("Smooth scroll to {} failed: {}", selector, err);
                }
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_real_fragments_are_intercepted() {
        assert_eq!(fragment_target("#section1"), Some("#section1"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("contact.html"), None);
        assert_eq!(fragment_target("contact.html#form"), None);
        assert_eq!(fragment_target(""), None);
    }

    #[test]
    fn target_lands_below_fixed_header() {
        assert_eq!(scroll_target_top(1200.0), 1120.0);
        assert_eq!(scroll_target_top(80.0), 0.0);
        assert_eq!(scroll_target_top(0.0), -80.0);
    }
}

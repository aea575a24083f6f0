use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::error::{js_message, Result, SiteError};

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    pub children: Children,
}

/// Keeps the observer and its JS callback alive for as long as the element is mounted.
struct Reveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Reveal {
    fn disconnect(self) {
        self.observer.disconnect();
    }
}

/// Marks `element` visible the first time it is at least 10% inside the viewport,
/// then stops watching it.
fn observe_once(element: &Element, visible: UseStateHandle<bool>) -> Result<Reveal> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    observer.unobserve(&entry.target());
                    visible.set(true);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::FADE_THRESHOLD));
    options.set_root_margin(config::FADE_ROOT_MARGIN);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|e| SiteError::Observer(js_message(&e)))?;
    observer.observe(element);

    Ok(Reveal { observer, _callback: callback })
}

#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(move |_| {
            let reveal = node.cast::<Element>().and_then(|element| {
                match observe_once(&element, visible.clone()) {
                    Ok(reveal) => Some(reveal),
                    Err(e) => {
                        warn!("Showing element without animation: {}", e);
                        visible.set(true);
                        None
                    }
                }
            });
            move || {
                if let Some(reveal) = reveal {
                    reveal.disconnect();
                }
            }
        }, ());
    }

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!("fade-in-scroll", props.class.clone(), (*visible).then(|| "visible"))}
        >
            { for props.children.iter() }
        </div>
    }
}

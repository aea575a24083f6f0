use web_sys::{
    Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

use crate::error::{js_message, Result, SiteError};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(SiteError::NoDocument)
}

/// Smoothly scrolls the window so that `top` sits at the top of the viewport.
pub fn scroll_window_to(top: f64) -> Result<()> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn scroll_into_view(element: &Element, block: ScrollLogicalPosition) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// The page body starts transparent; this fades it in once the app is mounted.
pub fn reveal_body() -> Result<()> {
    let body = document()?.body().ok_or(SiteError::NoDocument)?;
    body.style()
        .set_property("opacity", "1")
        .map_err(|e| SiteError::Dom(js_message(&e)))
}

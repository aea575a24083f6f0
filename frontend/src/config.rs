use log::Level;

/// Vertical scroll offset, in pixels, past which the navbar gets its `scrolled` style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Height of the fixed navbar; fragment targets land this far below the viewport top.
pub const HEADER_OFFSET_PX: f64 = 80.0;

pub const SUCCESS_BANNER_MS: u32 = 5_000;
pub const BODY_REVEAL_DELAY_MS: u32 = 100;

pub const FADE_THRESHOLD: f64 = 0.1;
pub const FADE_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const CONSENT_KEY: &str = "cookiesAccepted";
pub const CONSENT_ACCEPTED: &str = "true";

/// Page name used for the active nav link when the URL path ends in `/`.
pub const DEFAULT_PAGE: &str = "index.html";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

use log::{error, warn};
use yew::prelude::*;

use crate::config;
use crate::error::Result;
use crate::storage::{browser_store, KeyValueStore};

/// The persisted cookie acceptance flag.
pub struct Consent<S> {
    store: S,
}

impl<S: KeyValueStore> Consent<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// An empty stored value counts as not accepted.
    pub fn is_accepted(&self) -> Result<bool> {
        let value = self.store.get(config::CONSENT_KEY)?;
        Ok(value.map_or(false, |v| !v.is_empty()))
    }

    pub fn should_show(&self) -> bool {
        match self.is_accepted() {
            Ok(accepted) => !accepted,
            Err(e) => {
                warn!("Could not read cookie consent: {}", e);
                true
            }
        }
    }

    pub fn accept(&mut self) -> Result<()> {
        self.store.set(config::CONSENT_KEY, config::CONSENT_ACCEPTED)
    }
}

#[function_component(CookieConsent)]
pub fn cookie_consent() -> Html {
    let consent = use_mut_ref(|| Consent::new(browser_store()));
    let show = use_state_eq(|| consent.borrow().should_show());

    let accept = {
        let consent = consent.clone();
        let show = show.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = consent.borrow_mut().accept() {
                error!("Failed to save cookie consent: {}", e);
            }
            show.set(false);
        })
    };

    html! {
        <div id="cookieConsent" class={classes!("cookie-consent", (*show).then(|| "show"))}>
            <div class="cookie-content">
                <p>
                    {"We use cookies to improve your experience on our site. By continuing to browse, you agree to our use of cookies."}
                </p>
                <button id="acceptCookies" class="btn btn-primary" onclick={accept}>
                    {"Accept"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn fresh_browser_shows_banner() {
        let consent = Consent::new(MemoryStore::default());
        assert!(consent.should_show());
        assert!(!consent.is_accepted().unwrap());
    }

    #[test]
    fn acceptance_persists_across_loads() {
        let store = MemoryStore::default();

        let mut first_load = Consent::new(store.clone());
        assert!(first_load.should_show());
        first_load.accept().unwrap();

        assert_eq!(store.get("cookiesAccepted").unwrap().as_deref(), Some("true"));
        let second_load = Consent::new(store);
        assert!(!second_load.should_show());
    }

    #[test]
    fn empty_flag_is_not_acceptance() {
        let mut store = MemoryStore::default();
        store.set("cookiesAccepted", "").unwrap();
        assert!(Consent::new(store).should_show());
    }

    #[test]
    fn any_non_empty_flag_counts() {
        let mut store = MemoryStore::default();
        store.set("cookiesAccepted", "yes").unwrap();
        assert!(!Consent::new(store).should_show());
    }
}

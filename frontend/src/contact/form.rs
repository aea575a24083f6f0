use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::config;
use crate::contact::validation::{submit, validate, ContactDraft, Field, FieldErrors, SubmitOutcome};
use crate::dom;

pub const SUBJECTS: &[(&str, &str)] = &[
    ("lease-review", "Lease Review"),
    ("tenant-dispute", "Tenant Dispute"),
    ("landlord-services", "Landlord Services"),
    ("eviction", "Eviction Defense"),
    ("other", "Other"),
];

#[derive(Clone, Default, PartialEq)]
struct FieldRefs {
    name: NodeRef,
    email: NodeRef,
    phone: NodeRef,
    subject: NodeRef,
    message: NodeRef,
}

impl FieldRefs {
    fn get(&self, field: Field) -> &NodeRef {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }
}

/// Success banner visibility plus a count of successful submits. The count changes
/// on every submit, so the banner is scrolled to even when it is already shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Banner {
    pub shown: bool,
    pub sent: u32,
}

pub enum BannerAction {
    Sent,
    Expired,
}

impl Reducible for Banner {
    type Action = BannerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            BannerAction::Sent => Rc::new(Banner {
                shown: true,
                sent: self.sent.wrapping_add(1),
            }),
            BannerAction::Expired => Rc::new(Banner {
                shown: false,
                ..*self
            }),
        }
    }
}

fn target_value(event: &Event) -> String {
    let Some(target) = event.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

fn log_submission(submission: &ContactDraft) {
    info!("Form submitted successfully!");
    match serde_wasm_bindgen::to_value(submission) {
        Ok(value) => gloo_console::log!(value),
        Err(e) => warn!("Could not serialize submission: {}", e),
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_state(ContactDraft::default);
    let errors = use_state(FieldErrors::default);
    let banner = use_reducer_eq(Banner::default);
    let refs = use_state(FieldRefs::default);
    let success_ref = use_node_ref();
    let form_ref = use_node_ref();

    // The banner is display:none until rendered, so scroll after each successful
    // submit has been rendered.
    {
        let success_ref = success_ref.clone();
        use_effect_with_deps(
            move |sent| {
                if *sent > 0 {
                    if let Some(element) = success_ref.cast::<Element>() {
                        dom::scroll_into_view(&element, ScrollLogicalPosition::Nearest);
                    }
                }
                || ()
            },
            banner.sent,
        );
    }

    let on_input = |field: Field| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.set(field, target_value(&e));
            draft.set(next);
        })
    };

    let check = |field: Field| {
        let errors = errors.clone();
        move |e: &Event| {
            let mut next = (*errors).clone();
            next.record(field, validate(field, &target_value(e)));
            errors.set(next);
        }
    };

    let on_blur = |field: Field| {
        let check = check(field);
        Callback::from(move |e: FocusEvent| {
            let event: &Event = &e;
            check(event);
        })
    };

    let on_subject_change = {
        let draft = draft.clone();
        let check = check(Field::Subject);
        Callback::from(move |e: Event| {
            let mut next = (*draft).clone();
            next.set(Field::Subject, target_value(&e));
            draft.set(next);
            check(&e);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let banner = banner.dispatcher();
        let refs = refs.clone();
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            match submit(&draft) {
                SubmitOutcome::Sent { submission, draft: cleared, errors: no_errors } => {
                    log_submission(&submission);
                    errors.set(no_errors);
                    draft.set(cleared);
                    if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                        form.reset();
                    }
                    banner.dispatch(BannerAction::Sent);

                    let banner = banner.clone();
                    Timeout::new(config::SUCCESS_BANNER_MS, move || {
                        banner.dispatch(BannerAction::Expired);
                    })
                    .forget();
                }
                SubmitOutcome::Rejected { errors: failed, scroll_to, .. } => {
                    errors.set(failed);
                    if let Some(input) = refs.get(scroll_to).cast::<Element>() {
                        dom::scroll_into_view(&input, ScrollLogicalPosition::Center);
                    }
                }
            }
        })
    };

    let input_class = |field: Field| {
        classes!("form-control", errors.has_error(field).then(|| "error"))
    };

    let error_text = |field: Field| {
        html! {
            <span id={field.error_id()} class="error-message">{ errors.message(field) }</span>
        }
    };

    html! {
        <form id="contactForm" ref={form_ref} class="contact-form" novalidate=true {onsubmit}>
            <div class="form-group">
                <label for="name">{"Full Name *"}</label>
                <input
                    type="text"
                    id={Field::Name.id()}
                    name="name"
                    ref={refs.get(Field::Name).clone()}
                    class={input_class(Field::Name)}
                    value={draft.name.clone()}
                    oninput={on_input(Field::Name)}
                    onblur={on_blur(Field::Name)}
                />
                { error_text(Field::Name) }
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="email">{"Email Address *"}</label>
                    <input
                        type="email"
                        id={Field::Email.id()}
                        name="email"
                        ref={refs.get(Field::Email).clone()}
                        class={input_class(Field::Email)}
                        value={draft.email.clone()}
                        oninput={on_input(Field::Email)}
                        onblur={on_blur(Field::Email)}
                    />
                    { error_text(Field::Email) }
                </div>
                <div class="form-group">
                    <label for="phone">{"Phone Number"}</label>
                    <input
                        type="tel"
                        id={Field::Phone.id()}
                        name="phone"
                        ref={refs.get(Field::Phone).clone()}
                        class={input_class(Field::Phone)}
                        value={draft.phone.clone()}
                        oninput={on_input(Field::Phone)}
                        onblur={on_blur(Field::Phone)}
                    />
                    { error_text(Field::Phone) }
                </div>
            </div>

            <div class="form-group">
                <label for="subject">{"Subject *"}</label>
                <select
                    id={Field::Subject.id()}
                    name="subject"
                    ref={refs.get(Field::Subject).clone()}
                    class={input_class(Field::Subject)}
                    onchange={on_subject_change}
                >
                    <option value="" selected={draft.subject.is_empty()}>{"Select a subject"}</option>
                    { for SUBJECTS.iter().map(|(value, label)| html! {
                        <option value={*value} selected={draft.subject == *value}>{*label}</option>
                    }) }
                </select>
                { error_text(Field::Subject) }
            </div>

            <div class="form-group">
                <label for="message">{"Message *"}</label>
                <textarea
                    id={Field::Message.id()}
                    name="message"
                    rows="6"
                    ref={refs.get(Field::Message).clone()}
                    class={input_class(Field::Message)}
                    value={draft.message.clone()}
                    oninput={on_input(Field::Message)}
                    onblur={on_blur(Field::Message)}
                />
                { error_text(Field::Message) }
            </div>

            <button type="submit" class="btn btn-primary">{"Send Message"}</button>

            <div
                id="formSuccess"
                ref={success_ref}
                class="form-success"
                style={if banner.shown { "display: block;" } else { "display: none;" }}
            >
                {"Thank you! Your message has been received. We will get back to you within one business day."}
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_successful_submit_changes_the_banner_state() {
        let first = Rc::new(Banner::default()).reduce(BannerAction::Sent);
        assert!(first.shown);
        assert_eq!(first.sent, 1);

        // Submitting again while the banner is still up must still be a change,
        // otherwise the scroll effect keyed on `sent` would not run.
        let second = first.clone().reduce(BannerAction::Sent);
        assert!(second.shown);
        assert_ne!(*first, *second);
        assert_eq!(second.sent, 2);
    }

    #[test]
    fn expiry_hides_the_banner_and_keeps_the_count() {
        let shown = Rc::new(Banner::default()).reduce(BannerAction::Sent);
        let hidden = shown.reduce(BannerAction::Expired);
        assert_eq!(*hidden, Banner { shown: false, sent: 1 });
    }

    #[test]
    fn subject_options_have_distinct_non_empty_values() {
        let values: Vec<_> = SUBJECTS.iter().map(|(value, _)| *value).collect();
        assert!(values.iter().all(|v| !v.is_empty()));
        let mut deduped = values.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), values.len());
    }
}

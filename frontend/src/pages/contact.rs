use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::contact::form::ContactForm;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-page">
            <section class="page-hero">
                <h1>{"Contact Us"}</h1>
                <p>{"Tell us about your situation and we will reply within one business day."}</p>
            </section>

            <section class="section contact-layout">
                <FadeIn class="contact-info">
                    <h2>{"Office"}</h2>
                    <p>{"123 Main Street, Suite 400"}</p>
                    <p>{"Monday to Friday, 9am to 5pm"}</p>
                    <p>{"info@leaselegal.com"}</p>
                    <p>{"(555) 123-4567"}</p>
                </FadeIn>
                <div class="contact-form-wrapper">
                    <ContactForm />
                </div>
            </section>
        </div>
    }
}

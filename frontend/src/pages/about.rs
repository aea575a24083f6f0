use yew::prelude::*;

use crate::components::fade_in::FadeIn;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="page-hero">
                <h1>{"About Lease Legal"}</h1>
                <p>{"A small practice focused entirely on housing law."}</p>
            </section>

            <section class="section">
                <FadeIn class="about-block">
                    <h2>{"Our mission"}</h2>
                    <p>
                        {"Most lease problems are avoidable, and most disputes can be settled without court. We started Lease Legal to give tenants and landlords straightforward legal help at a price that makes sense for the size of the problem."}
                    </p>
                </FadeIn>
                <FadeIn class="about-block">
                    <h2>{"How we work"}</h2>
                    <p>
                        {"Every matter starts with a free consultation and a fixed quote. You always know what the next step is and what it will cost."}
                    </p>
                </FadeIn>
                <FadeIn class="about-block">
                    <h2>{"Who we help"}</h2>
                    <p>
                        {"Renters, first-time landlords, property managers and small businesses leasing commercial space."}
                    </p>
                </FadeIn>
            </section>
        </div>
    }
}

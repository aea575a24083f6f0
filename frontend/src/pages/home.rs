use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::fade_in::FadeIn;
use crate::Route;

struct PracticeArea {
    title: &'static str,
    summary: &'static str,
}

const PRACTICE_AREAS: [PracticeArea; 4] = [
    PracticeArea {
        title: "Lease Review",
        summary: "We read the fine print before you sign, flag unfair clauses and explain what every term means for you.",
    },
    PracticeArea {
        title: "Tenant Disputes",
        summary: "Deposits withheld, repairs ignored, rent raised without notice: we help you push back with the law on your side.",
    },
    PracticeArea {
        title: "Landlord Services",
        summary: "Compliant lease templates, notices and guidance so small landlords can manage properties with confidence.",
    },
    PracticeArea {
        title: "Eviction Defense",
        summary: "Fast, practical representation when your home is at stake, from the first notice through to the hearing.",
    },
];

const STEPS: [(&str, &str); 3] = [
    ("Tell us about your situation", "Use the contact form or call us. A short description is enough to get started."),
    ("Get a clear plan", "We review your documents and explain your options in plain language, with a fixed quote."),
    ("Resolve it", "We negotiate, draft or represent you until the matter is settled."),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <section class="hero" id="top">
                <div class="hero-content">
                    <h1>{"Lease problems, solved by people who know the law"}</h1>
                    <p class="hero-subtitle">
                        {"Lease Legal helps tenants and landlords understand their agreements, settle disputes and stay on the right side of housing law."}
                    </p>
                    <div class="hero-actions">
                        <AnchorLink href="#practice-areas" class="btn btn-primary">{"What we do"}</AnchorLink>
                        <AnchorLink href="#how-it-works" class="btn btn-secondary">{"How it works"}</AnchorLink>
                    </div>
                </div>
            </section>

            <section class="section" id="practice-areas">
                <h2 class="section-title">{"Practice Areas"}</h2>
                <div class="card-grid">
                    { for PRACTICE_AREAS.iter().map(|area| html! {
                        <FadeIn class="card">
                            <h3>{area.title}</h3>
                            <p>{area.summary}</p>
                        </FadeIn>
                    }) }
                </div>
            </section>

            <section class="section section-alt" id="how-it-works">
                <h2 class="section-title">{"How It Works"}</h2>
                <ol class="steps">
                    { for STEPS.iter().enumerate().map(|(i, (title, body))| html! {
                        <li>
                            <FadeIn class="step">
                                <span class="step-number">{i + 1}</span>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </FadeIn>
                        </li>
                    }) }
                </ol>
            </section>

            <FadeIn class="cta">
                <h2>{"Have a question about your lease?"}</h2>
                <p>{"The first consultation is free. We reply within one business day."}</p>
                <Link<Route> to={Route::Contact} classes="btn btn-primary">
                    {"Contact us"}
                </Link<Route>>
            </FadeIn>
        </div>
    }
}

use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::fade_in::FadeIn;

#[derive(Properties, PartialEq)]
struct ServiceProps {
    id: AttrValue,
    title: AttrValue,
    children: Children,
}

#[function_component(Service)]
fn service(props: &ServiceProps) -> Html {
    html! {
        <FadeIn id={props.id.clone()} class="service">
            <h2>{&props.title}</h2>
            { for props.children.iter() }
        </FadeIn>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <section class="page-hero">
                <h1>{"Our Services"}</h1>
                <p>{"Fixed-fee help for every stage of a tenancy."}</p>
                <nav class="service-index">
                    <AnchorLink href="#lease-review">{"Lease Review"}</AnchorLink>
                    <AnchorLink href="#tenant-disputes">{"Tenant Disputes"}</AnchorLink>
                    <AnchorLink href="#landlord-services">{"Landlord Services"}</AnchorLink>
                    <AnchorLink href="#eviction-defense">{"Eviction Defense"}</AnchorLink>
                </nav>
            </section>

            <section class="section">
                <Service id="lease-review" title="Lease Review">
                    <p>{"A line-by-line review of residential or commercial leases before you sign or renew."}</p>
                    <ul>
                        <li>{"Written summary of your rights and obligations"}</li>
                        <li>{"Unfair or unenforceable clauses highlighted"}</li>
                        <li>{"Suggested amendments to negotiate"}</li>
                    </ul>
                </Service>
                <Service id="tenant-disputes" title="Tenant Disputes">
                    <p>{"Support when things go wrong during a tenancy."}</p>
                    <ul>
                        <li>{"Security deposit recovery"}</li>
                        <li>{"Repair and habitability claims"}</li>
                        <li>{"Rent increase challenges"}</li>
                    </ul>
                </Service>
                <Service id="landlord-services" title="Landlord Services">
                    <p>{"Practical tools for independent landlords."}</p>
                    <ul>
                        <li>{"Lease templates drafted for your jurisdiction"}</li>
                        <li>{"Notices to quit and rent demand letters"}</li>
                        <li>{"Compliance checks"}</li>
                    </ul>
                </Service>
                <Service id="eviction-defense" title="Eviction Defense">
                    <p>{"Representation from the first notice through to the court hearing."}</p>
                    <ul>
                        <li>{"Notice validity review"}</li>
                        <li>{"Negotiated settlements and payment plans"}</li>
                        <li>{"Court representation"}</li>
                    </ul>
                </Service>
                <p class="back-to-top">
                    <AnchorLink href="#">{"Back to top"}</AnchorLink>
                </p>
            </section>
        </div>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-container">
                <div class="footer-brand">
                    <h3>{"Lease Legal"}</h3>
                    <p>{"Clear, affordable legal help for tenants and landlords."}</p>
                </div>
                <div class="footer-links">
                    <h4>{"Explore"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::Services}>{"Services"}</Link<Route>></li>
                        <li><Link<Route> to={Route::About}>{"About"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                    </ul>
                </div>
                <div class="footer-contact">
                    <h4>{"Get in touch"}</h4>
                    <p>{"info@leaselegal.com"}</p>
                    <p>{"(555) 123-4567"}</p>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{"© 2024 Lease Legal. All rights reserved. This website provides general information and does not constitute legal advice."}</p>
            </div>
        </footer>
    }
}

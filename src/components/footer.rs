use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::services::SERVICES;
use crate::config;
use crate::reveal::use_reveal;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let footer_ref = use_node_ref();
    let visible = use_reveal(footer_ref.clone());

    html! {
        <footer ref={footer_ref} class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #1a1a2e;
                        color: #ffffff;
                        padding: 3rem 0 2rem;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 2rem;
                    }
                    .footer-logo {
                        font-size: 1.5rem;
                        font-weight: 800;
                        margin-bottom: 1rem;
                    }
                    .footer-logo .logo-rest { color: #ffffff; }
                    .footer-blurb {
                        color: #9aa0b0;
                        margin-bottom: 1rem;
                    }
                    .site-footer h3 {
                        color: #e8a100;
                        font-size: 1.05rem;
                        margin-bottom: 1rem;
                    }
                    .footer-links {
                        list-style: none;
                    }
                    .footer-links li { margin-bottom: 0.5rem; }
                    .footer-links a, .footer-links p {
                        color: #9aa0b0;
                        text-decoration: none;
                        transition: color 0.3s ease, padding-left 0.3s ease;
                    }
                    .footer-links a:hover {
                        color: #e8a100;
                        padding-left: 5px;
                    }
                    .footer-bar {
                        border-top: 1px solid #2c2c44;
                        margin-top: 2.5rem;
                        padding-top: 1.5rem;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 1rem;
                        color: #9aa0b0;
                        font-size: 0.9rem;
                    }
                "#}
            </style>
            <div class={classes!("container", visible.class("rise-in"))}>
                <div class="footer-grid">
                    <div>
                        <div class="footer-logo">
                            <span class="logo-accent">{"bright"}</span>
                            <span class="logo-rest">{"forge"}</span>
                        </div>
                        <p class="footer-blurb">
                            {"Software, infrastructure, data and automation engineering \
                              that turns hard problems into working solutions."}
                        </p>
                    </div>
                    <div>
                        <h3>{"Company"}</h3>
                        <ul class="footer-links">
                            <li><Link<Route> to={Route::About}>{"About Us"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Portfolio}>{"Portfolio"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                        </ul>
                    </div>
                    <div>
                        <h3>{"Our Services"}</h3>
                        <ul class="footer-links">
                            { for SERVICES.iter().map(|service| html! {
                                <li>
                                    <Link<Route> to={Route::Services}>{ service.name }</Link<Route>>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h3>{"Contact"}</h3>
                        <ul class="footer-links">
                            <li><p>{ config::CONTACT_PHONE }</p></li>
                            <li><p>{ config::CONTACT_EMAIL }</p></li>
                            { for config::CONTACT_ADDRESS.lines().map(|line| html! {
                                <li><p>{ line }</p></li>
                            }) }
                        </ul>
                    </div>
                </div>
                <div class="footer-bar">
                    <p>{"© 2026 brightforge. All rights reserved."}</p>
                    <p>{"Built by the brightforge engineering team."}</p>
                </div>
            </div>
        </footer>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::services::{service_icon, SERVICES};
use crate::reveal::use_reveal;
use crate::Route;

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    let list_ref = use_node_ref();
    let visible = use_reveal(list_ref.clone());

    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <>
            <div class="services-page">
                <style>
                    {r#"
                        .services-page {
                            padding: 8rem 0 5rem;
                        }
                        .page-heading {
                            text-align: center;
                            margin-bottom: 4rem;
                        }
                        .page-heading h1 {
                            font-size: 2.8rem;
                            margin-bottom: 1rem;
                        }
                        .page-heading p {
                            font-size: 1.2rem;
                            color: #5c6370;
                            max-width: 720px;
                            margin: 0 auto;
                        }
                        .service-detail {
                            display: flex;
                            flex-wrap: wrap;
                            gap: 2rem;
                            padding: 2.5rem;
                            margin-bottom: 2.5rem;
                        }
                        .service-detail:hover {
                            box-shadow: 12px 12px 24px #ccd1d9, -12px -12px 24px #ffffff;
                        }
                        .service-detail-head {
                            flex: 1 1 280px;
                        }
                        .service-detail-head h2 {
                            margin: 1rem 0 0.75rem;
                        }
                        .service-detail-head p { color: #5c6370; }
                        .service-offerings {
                            flex: 1 1 320px;
                            list-style: none;
                        }
                        .service-offerings li {
                            display: flex;
                            align-items: center;
                            gap: 0.75rem;
                            color: #5c6370;
                            margin-bottom: 0.75rem;
                        }
                        .offering-dot {
                            width: 8px;
                            height: 8px;
                            border-radius: 50%;
                            background: #e8a100;
                            flex-shrink: 0;
                        }
                        .services-page-cta {
                            text-align: center;
                            margin-top: 3rem;
                        }
                    "#}
                </style>
                <div class="container">
                    <div class="page-heading drop-in">
                        <h1>{"Our Services"}</h1>
                        <p>
                            {"From one-off builds to long-running partnerships, every \
                              engagement starts with understanding the problem you are \
                              actually trying to solve."}
                        </p>
                    </div>
                    <div ref={list_ref}>
                        { for SERVICES.iter().enumerate().map(|(index, service)| {
                            let entrance = if visible.is_revealed() {
                                match index {
                                    0 => "rise-in delay-1",
                                    1 => "rise-in delay-2",
                                    2 => "rise-in delay-3",
                                    3 => "rise-in delay-4",
                                    _ => "rise-in delay-5",
                                }
                            } else {
                                "reveal-hidden"
                            };
                            html! {
                                <div class={classes!("nm-card", "service-detail", entrance)}>
                                    <div class="service-detail-head">
                                        <div class="nm-icon">{ service_icon(index) }</div>
                                        <h2>{ service.name }</h2>
                                        <p>{ service.blurb }</p>
                                    </div>
                                    <ul class="service-offerings">
                                        { for service.offerings.iter().map(|offering| html! {
                                            <li>
                                                <span class="offering-dot"></span>
                                                { *offering }
                                            </li>
                                        }) }
                                    </ul>
                                </div>
                            }
                        }) }
                    </div>
                    <div class="services-page-cta">
                        <Link<Route> to={Route::Contact} classes="nm-button nm-button-primary">
                            {"Request a Quote"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <Footer />
        </>
    }
}

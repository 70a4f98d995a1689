use yew::prelude::*;
use yew_router::prelude::*;

use crate::reveal::use_reveal;
use crate::Route;

#[derive(PartialEq)]
pub struct Service {
    pub name: &'static str,
    pub blurb: &'static str,
    pub offerings: [&'static str; 5],
}

/// The fixed service catalogue. Also feeds the contact form's service select.
pub static SERVICES: [Service; 5] = [
    Service {
        name: "Software Development",
        blurb: "Custom software, responsive web and mobile applications, APIs and \
                integrations built around the way your business actually works.",
        offerings: [
            "Custom line-of-business software",
            "Responsive web applications",
            "Mobile apps for Android and iOS",
            "API design and third-party integrations",
            "Legacy system modernization",
        ],
    },
    Service {
        name: "Infrastructure & Networks",
        blurb: "IT infrastructure consulting, network implementation and management, \
                information security and cloud solutions.",
        offerings: [
            "Infrastructure assessment and consulting",
            "Network design and management",
            "Information security hardening",
            "Cloud migration and operations",
            "Virtualization and containers",
        ],
    },
    Service {
        name: "Data & AI",
        blurb: "Analytics, machine learning and data engineering that turn the data \
                you already have into decisions you can act on.",
        offerings: [
            "Data analysis and visualization",
            "Machine learning model development",
            "Recommendation and forecasting systems",
            "Natural language processing",
            "Data pipelines and ETL",
        ],
    },
    Service {
        name: "Consulting & Training",
        blurb: "Specialized IT consulting and hands-on training that brings your team \
                up to speed on current technology.",
        offerings: [
            "Technology strategy consulting",
            "Tailored team training programs",
            "Workshops on emerging technology",
            "Mentoring for development teams",
            "Process and systems audits",
        ],
    },
    Service {
        name: "Automation & IoT",
        blurb: "Process automation and Internet of Things projects that connect your \
                devices and take the repetition out of your operations.",
        offerings: [
            "Industrial process automation",
            "IoT device fleets and telemetry",
            "Smart building integrations",
            "Embedded systems development",
            "Monitoring and alerting pipelines",
        ],
    },
];

/// Small stroke icon per service, indexed in catalogue order.
pub fn service_icon(index: usize) -> Html {
    let path = match index {
        0 => "M8 6l-4 6 4 6M16 6l4 6-4 6M13 4l-2 16",
        1 => "M4 6h16v8H4zM9 18h6M12 14v4",
        2 => "M4 6c0-1.5 3.5-3 8-3s8 1.5 8 3-3.5 3-8 3-8-1.5-8-3zM4 6v12c0 1.5 3.5 3 8 3s8-1.5 8-3V6",
        3 => "M12 4a4 4 0 110 8 4 4 0 010-8zM5 20c0-3.5 3-6 7-6s7 2.5 7 6",
        _ => "M12 3v3M12 18v3M3 12h3M18 12h3M12 8a4 4 0 110 8 4 4 0 010-8z",
    };
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" width="28" height="28" viewBox="0 0 24 24"
            fill="none" stroke="#e8a100" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path} />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: &'static Service,
    index: usize,
    revealed: bool,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let service = props.service;
    let entrance = if props.revealed {
        match props.index {
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
        <div
            class={classes!("nm-card", "service-card", entrance, (*hovered).then(|| "hovered"))}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="nm-icon service-icon">
                { service_icon(props.index) }
            </div>
            <h3>{ service.name }</h3>
            <p>{ service.blurb }</p>
            <Link<Route> to={Route::Services} classes="nm-button">
                {"Learn more"}
            </Link<Route>>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesSectionProps {
    pub title: String,
    pub subtitle: String,
}

#[function_component(ServicesSection)]
pub fn services_section(props: &ServicesSectionProps) -> Html {
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone());

    html! {
        <section ref={section_ref} class="services-section">
            <style>
                {r#"
                    .services-section {
                        padding: 6rem 0;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .service-card {
                        padding: 2rem;
                        text-align: center;
                    }
                    .service-card.hovered {
                        transform: translateY(-10px);
                        box-shadow: 12px 12px 24px #ccd1d9, -12px -12px 24px #ffffff;
                    }
                    .service-card.hovered h3 { color: #e8a100; }
                    .service-card h3 {
                        margin-bottom: 0.75rem;
                        transition: color 0.3s ease;
                    }
                    .service-card p {
                        color: #5c6370;
                        margin-bottom: 1.5rem;
                    }
                    .service-icon { margin: 0 auto 1.5rem; }
                    .services-cta {
                        text-align: center;
                        margin-top: 3rem;
                    }
                "#}
            </style>
            <div class={classes!("section-heading", visible.class("drop-in"))}>
                <h2>{ &props.title }</h2>
                <p>{ &props.subtitle }</p>
            </div>
            <div class="services-grid">
                { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                    <ServiceCard {service} {index} revealed={visible.is_revealed()} />
                }) }
            </div>
            <div class={classes!("services-cta", visible.class("rise-in delay-6"))}>
                <Link<Route> to={Route::Services} classes="nm-button nm-button-primary">
                    {"See All Services"}
                </Link<Route>>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_lookup_is_total_past_the_catalogue_end() {
        for index in 0..SERVICES.len() + 3 {
            let _ = service_icon(index);
        }
    }

    #[test]
    fn catalogue_names_are_distinct() {
        let mut names: Vec<_> = SERVICES.iter().map(|service| service.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), SERVICES.len());
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::reveal::use_reveal;
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Software,
    Mobile,
    Infrastructure,
    Data,
    Iot,
    Ai,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Software,
        Category::Mobile,
        Category::Infrastructure,
        Category::Data,
        Category::Iot,
        Category::Ai,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Software => "Software",
            Category::Mobile => "Mobile",
            Category::Infrastructure => "Infrastructure",
            Category::Data => "Data",
            Category::Iot => "IoT",
            Category::Ai => "AI",
        }
    }
}

/// Active portfolio filter: everything, or one category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == category,
        }
    }
}

#[derive(PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub blurb: &'static str,
    pub stack: [&'static str; 3],
    pub category: Category,
}

pub static PROJECTS: [Project; 6] = [
    Project {
        title: "Enterprise Management System",
        blurb: "A full management platform for a mid-size logistics company, from \
                inventory through invoicing.",
        stack: ["Rust", "PostgreSQL", "React"],
        category: Category::Software,
    },
    Project {
        title: "Delivery App",
        blurb: "Mobile ordering and courier tracking for a regional restaurant group.",
        stack: ["Flutter", "Firebase", "Maps API"],
        category: Category::Mobile,
    },
    Project {
        title: "Cloud Migration",
        blurb: "Moved a financial-services firm's on-premise estate into the cloud \
                with zero-downtime cutover.",
        stack: ["AWS", "Terraform", "Docker"],
        category: Category::Infrastructure,
    },
    Project {
        title: "Retail Analytics Platform",
        blurb: "Sales and inventory analytics with daily forecasting for a retail chain.",
        stack: ["Python", "dbt", "Power BI"],
        category: Category::Data,
    },
    Project {
        title: "Building Automation",
        blurb: "End-to-end automation for a residential complex: access, climate and \
                energy metering.",
        stack: ["IoT", "Raspberry Pi", "MQTT"],
        category: Category::Iot,
    },
    Project {
        title: "Support Chatbot",
        blurb: "A customer-support assistant handling first-line requests for a telecom.",
        stack: ["NLP", "Python", "Kubernetes"],
        category: Category::Ai,
    },
];

const TESTIMONIALS: [(&str, &str, &str); 4] = [
    (
        "Joan Mercer",
        "IT Director, Hallfield Logistics",
        "brightforge exceeded every expectation we had. The management system they \
         built transformed our internal processes and lifted productivity by over 30%.",
    ),
    (
        "Marta Oliva",
        "CEO, Lumen Labs",
        "Hiring brightforge was the best decision we made. They didn't just build \
         our app, they helped us sharpen the product itself.",
    ),
    (
        "Peter Sandoval",
        "Operations Manager, Delta Fabrication",
        "The automation rollout cut our operating costs by a quarter and all but \
         eliminated unplanned stoppages.",
    ),
    (
        "Anna Kowalski",
        "Marketing Director, Greenline Retail",
        "The analytics platform let us finally understand our audience. Campaign \
         ROI is up more than 40% since launch.",
    ),
];

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
    revealed: bool,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let project = props.project;
    let entrance = if props.revealed { "rise-in" } else { "reveal-hidden" };

    html! {
        <div class={classes!("nm-card", "project-card", entrance)} {onmouseenter} {onmouseleave}>
            <div class="project-image">
                <span>{ project.category.label() }</span>
                <div class={classes!("project-overlay", (*hovered).then(|| "shown"))}>
                    <Link<Route> to={Route::Contact} classes="nm-button nm-button-primary">
                        {"Start a project"}
                    </Link<Route>>
                </div>
            </div>
            <div class="project-body">
                <h3>{ project.title }</h3>
                <p>{ project.blurb }</p>
                <div class="project-stack">
                    { for project.stack.iter().map(|tech| html! {
                        <span class="stack-tag">{ *tech }</span>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioSectionProps {
    pub title: String,
    pub subtitle: String,
}

#[function_component(PortfolioSection)]
pub fn portfolio_section(props: &PortfolioSectionProps) -> Html {
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone());
    let filter = use_state_eq(Filter::default);

    let filters: Vec<Filter> = std::iter::once(Filter::All)
        .chain(Category::ALL.into_iter().map(Filter::Only))
        .collect();

    html! {
        <section ref={section_ref} class="portfolio-section">
            <style>
                {r#"
                    .portfolio-section {
                        padding: 6rem 0;
                        background: #f5f7fa;
                    }
                    .portfolio-filters {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.75rem;
                        margin-bottom: 3rem;
                    }
                    .portfolio-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 2rem;
                    }
                    .project-card { overflow: hidden; }
                    .project-card:hover {
                        box-shadow: 12px 12px 24px #ccd1d9, -12px -12px 24px #ffffff;
                    }
                    .project-image {
                        position: relative;
                        aspect-ratio: 16 / 9;
                        background: #dfe4ec;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #8a93a3;
                        font-weight: 600;
                        border-radius: 20px 20px 0 0;
                    }
                    .project-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: flex-end;
                        justify-content: center;
                        padding: 1.5rem;
                        background: linear-gradient(to top, rgba(0,0,0,0.7), transparent);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                        border-radius: 20px 20px 0 0;
                    }
                    .project-overlay.shown { opacity: 1; }
                    .project-body { padding: 1.5rem; }
                    .project-body h3 { margin-bottom: 0.5rem; }
                    .project-body p {
                        color: #5c6370;
                        margin-bottom: 1rem;
                    }
                    .project-stack {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                    }
                    .stack-tag {
                        background: #f8ecc9;
                        color: #8a6400;
                        font-size: 0.75rem;
                        font-weight: 600;
                        padding: 0.2rem 0.7rem;
                        border-radius: 999px;
                    }
                    .testimonials {
                        margin-top: 5rem;
                    }
                    .testimonials h3 {
                        text-align: center;
                        font-size: 1.8rem;
                        margin-bottom: 2.5rem;
                    }
                    .testimonials-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(340px, 1fr));
                        gap: 2rem;
                    }
                    .testimonial-card { padding: 1.5rem; }
                    .testimonial-head {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }
                    .testimonial-avatar {
                        width: 48px;
                        height: 48px;
                        border-radius: 50%;
                        background: #dfe4ec;
                    }
                    .testimonial-role {
                        color: #5c6370;
                        font-size: 0.85rem;
                    }
                    .testimonial-card blockquote {
                        color: #5c6370;
                        font-style: italic;
                    }
                    .portfolio-cta {
                        margin-top: 4rem;
                        text-align: center;
                    }
                    .portfolio-cta .nm-card {
                        padding: 2.5rem;
                        background: #fbf4dd;
                    }
                    .portfolio-cta p {
                        color: #5c6370;
                        max-width: 640px;
                        margin: 0 auto 1.5rem;
                    }
                "#}
            </style>
            <div class="container">
                <div class={classes!("section-heading", visible.class("drop-in"))}>
                    <h2>{ &props.title }</h2>
                    <p>{ &props.subtitle }</p>
                </div>

                <div class={classes!("portfolio-filters", visible.class("rise-in delay-1"))}>
                    { for filters.into_iter().map(|entry| {
                        let active = *filter == entry;
                        let onclick = {
                            let filter = filter.clone();
                            Callback::from(move |_: MouseEvent| filter.set(entry))
                        };
                        html! {
                            <button
                                class={classes!("nm-button", active.then(|| "nm-button-primary"))}
                                {onclick}
                            >
                                { entry.label() }
                            </button>
                        }
                    }) }
                </div>

                <div class="portfolio-grid">
                    { for PROJECTS.iter()
                        .filter(|project| filter.matches(project.category))
                        .map(|project| html! {
                            <ProjectCard key={project.title} {project} revealed={visible.is_revealed()} />
                        }) }
                </div>

                <div class={classes!("testimonials", visible.class("rise-in delay-3"))}>
                    <h3>{"What our clients say"}</h3>
                    <div class="testimonials-grid">
                        { for TESTIMONIALS.iter().map(|(name, role, quote)| html! {
                            <div class="nm-card testimonial-card">
                                <div class="testimonial-head">
                                    <div class="testimonial-avatar"></div>
                                    <div>
                                        <h4>{ *name }</h4>
                                        <p class="testimonial-role">{ *role }</p>
                                    </div>
                                </div>
                                <blockquote>{ *quote }</blockquote>
                            </div>
                        }) }
                    </div>
                </div>

                <div class={classes!("portfolio-cta", visible.class("rise-in delay-4"))}>
                    <div class="nm-card">
                        <h3>{"Shall we work on your next project together?"}</h3>
                        <p>
                            {"Get in touch to talk through what you need and find out how we \
                              can help turn your ideas into working technology."}
                        </p>
                        <Link<Route> to={Route::Contact} classes="nm-button nm-button-primary">
                            {"Start a Project"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(filter: Filter) -> Vec<&'static Project> {
        PROJECTS
            .iter()
            .filter(|project| filter.matches(project.category))
            .collect()
    }

    #[test]
    fn all_filter_keeps_every_project() {
        assert_eq!(selected(Filter::All).len(), PROJECTS.len());
    }

    #[test]
    fn category_filter_keeps_exactly_the_matching_subset() {
        for category in Category::ALL {
            let picked = selected(Filter::Only(category));
            assert!(picked.iter().all(|p| p.category == category));
            let expected = PROJECTS.iter().filter(|p| p.category == category).count();
            assert_eq!(picked.len(), expected);
        }
    }

    #[test]
    fn filtering_hands_out_catalogue_entries_directly() {
        for category in Category::ALL {
            for project in selected(Filter::Only(category)) {
                assert!(PROJECTS.iter().any(|entry| std::ptr::eq(entry, project)));
            }
        }
    }

    #[test]
    fn default_filter_is_all() {
        assert_eq!(Filter::default(), Filter::All);
    }

    #[test]
    fn every_category_has_a_distinct_label() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
        let mut deduped = labels.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(labels.len(), deduped.len());
    }
}

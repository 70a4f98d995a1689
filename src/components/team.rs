use yew::prelude::*;
use yew_router::prelude::*;

use crate::reveal::use_reveal;
use crate::Route;

struct TeamMember {
    initials: &'static str,
    name: &'static str,
    roles: &'static str,
    bio: &'static str,
}

const MEMBERS: [TeamMember; 4] = [
    TeamMember {
        initials: "EV",
        name: "Elena Vargas",
        roles: "Engineering | Product Strategy | BI",
        bio: "Leads solution architecture across embedded systems and analytics, with \
              a decade of systems-integration work in the finance sector.",
    },
    TeamMember {
        initials: "TK",
        name: "Tomas Keller",
        roles: "Computer Engineering | Data Science | Industry 4.0",
        bio: "Industrial automation (PLCs, SCADA, industrial networks), software \
              engineering across the JVM and .NET stacks, and applied machine learning.",
    },
    TeamMember {
        initials: "NR",
        name: "Nadia Rahim",
        roles: "UX/UI Design | Frontend Development",
        bio: "Designs and builds accessible, usable interfaces for web and mobile, \
              from research through production frontends.",
    },
    TeamMember {
        initials: "DM",
        name: "Diego Morandi",
        roles: "DevOps | Cloud Infrastructure | Security",
        bio: "Cloud solutions architect focused on CI/CD pipelines, infrastructure \
              automation, and hardening production environments.",
    },
];

#[derive(Properties, PartialEq)]
pub struct TeamSectionProps {
    #[prop_or_else(|| "Our Team".to_string())]
    pub title: String,
    #[prop_or_else(|| "Specialists across every layer of the stack".to_string())]
    pub subtitle: String,
}

#[function_component(TeamSection)]
pub fn team_section(props: &TeamSectionProps) -> Html {
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone());

    html! {
        <section ref={section_ref} class="team-section">
            <style>
                {r#"
                    .team-section { padding: 6rem 0; }
                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 2rem;
                    }
                    .member-card {
                        padding: 2rem;
                        text-align: center;
                    }
                    .member-card:hover { transform: translateY(-5px); }
                    .member-avatar {
                        width: 80px;
                        height: 80px;
                        margin: 0 auto 1rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #dce8f7;
                        box-shadow: inset 4px 4px 8px #c2cddb, inset -4px -4px 8px #f6fbff;
                    }
                    .member-avatar span {
                        color: #2a5d9c;
                        font-size: 1.3rem;
                        font-weight: 700;
                    }
                    .member-roles {
                        color: #2a5d9c;
                        font-size: 0.85rem;
                        font-weight: 600;
                        margin: 0.5rem 0 1rem;
                    }
                    .member-bio {
                        color: #5c6370;
                        font-size: 0.9rem;
                    }
                    .team-cta {
                        margin-top: 4rem;
                        text-align: center;
                    }
                    .team-cta .nm-card {
                        max-width: 720px;
                        margin: 0 auto;
                        padding: 2.5rem;
                        background: #e8f0fb;
                    }
                    .team-cta p {
                        color: #5c6370;
                        margin: 1rem 0 1.5rem;
                    }
                "#}
            </style>
            <div class="container">
                <div class={classes!("section-heading", visible.class("drop-in"))}>
                    <h2>{ &props.title }</h2>
                    <p>{ &props.subtitle }</p>
                </div>
                <div class="team-grid">
                    { for MEMBERS.iter().enumerate().map(|(index, member)| {
                        let entrance = if visible.is_revealed() {
                            match index {
                                0 => "rise-in delay-1",
                                1 => "rise-in delay-2",
                                2 => "rise-in delay-3",
                                _ => "rise-in delay-4",
                            }
                        } else {
                            "reveal-hidden"
                        };
                        html! {
                            <div class={classes!("nm-card", "member-card", entrance)}>
                                <div class="member-avatar">
                                    <span>{ member.initials }</span>
                                </div>
                                <h3>{ member.name }</h3>
                                <p class="member-roles">{ member.roles }</p>
                                <p class="member-bio">{ member.bio }</p>
                            </div>
                        }
                    }) }
                </div>
                <div class={classes!("team-cta", visible.class("rise-in delay-5"))}>
                    <div class="nm-card">
                        <h3>{"Want to join the team?"}</h3>
                        <p>
                            {"We are always looking for people who care about building \
                              things well. If that sounds like you, we would love to hear \
                              from you."}
                        </p>
                        <Link<Route> to={Route::Contact} classes="nm-button nm-button-primary">
                            {"Get in Touch"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </section>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::team::TeamSection;
use crate::reveal::use_reveal;
use crate::Route;

const PILLARS: [(&str, &str); 3] = [
    (
        "Mission",
        "Turn difficult problems into opportunities through technology, pairing deep \
         technical knowledge with a close read of what each client actually needs.",
    ),
    (
        "Vision",
        "Be the team clients call first for technology they can depend on, known for \
         engineering quality and for following through.",
    ),
    (
        "Values",
        "Technical excellence, constant curiosity, straight talk with clients, and \
         a commitment to results that hold up long after handover.",
    ),
];

const DIFFERENTIATORS: [(&str, &str); 4] = [
    (
        "Tailored Approach",
        "Every project is different; we design each solution around the client's \
         specific constraints rather than forcing a template.",
    ),
    (
        "Technical Excellence",
        "A senior team that keeps current with the tools and practices that matter, \
         and knows which fads to skip.",
    ),
    (
        "Integrated Solutions",
        "Software, infrastructure and data expertise under one roof, so the pieces \
         of your system actually fit together.",
    ),
    (
        "Ongoing Support",
        "Our involvement doesn't end at delivery. We stay available to keep what we \
         built working as your needs change.",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
    let story_ref = use_node_ref();
    let story_visible = use_reveal(story_ref.clone());
    let pillars_ref = use_node_ref();
    let pillars_visible = use_reveal(pillars_ref.clone());
    let diff_ref = use_node_ref();
    let diff_visible = use_reveal(diff_ref.clone());

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
            <div class="about-page">
                <style>
                    {r#"
                        .about-page { padding: 8rem 0 5rem; }
                        .about-story {
                            display: flex;
                            flex-wrap: wrap;
                            align-items: center;
                            gap: 3rem;
                            margin-bottom: 5rem;
                        }
                        .story-visual { flex: 1 1 360px; }
                        .story-portrait {
                            aspect-ratio: 1;
                            border-radius: 14px;
                            background: #dfe4ec;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            color: #8a93a3;
                        }
                        .story-copy { flex: 1 1 420px; }
                        .story-copy h2 { margin-bottom: 1.5rem; }
                        .story-copy p {
                            color: #5c6370;
                            margin-bottom: 1rem;
                        }
                        .pillars-grid {
                            display: grid;
                            grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                            gap: 2rem;
                            margin-bottom: 5rem;
                        }
                        .pillar-card {
                            padding: 2rem;
                            text-align: center;
                        }
                        .pillar-card h3 {
                            font-size: 1.5rem;
                            margin-bottom: 1rem;
                        }
                        .pillar-card p { color: #5c6370; }
                        .about-section-title {
                            text-align: center;
                            font-size: 2rem;
                            margin-bottom: 2.5rem;
                        }
                        .diff-panel { padding: 2.5rem; }
                        .diff-grid {
                            display: grid;
                            grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                            gap: 2rem;
                        }
                        .diff-item {
                            display: flex;
                            gap: 1rem;
                        }
                        .diff-item h3 { margin-bottom: 0.5rem; }
                        .diff-item p { color: #5c6370; }
                        .about-cta {
                            margin-top: 4rem;
                            text-align: center;
                        }
                        .about-cta .nm-card {
                            padding: 2.5rem;
                            background: #fbf4dd;
                        }
                        .about-cta p {
                            color: #5c6370;
                            max-width: 640px;
                            margin: 0 auto 1.5rem;
                        }
                    "#}
                </style>
                <div class="container">
                    <div class="page-heading drop-in" style="text-align: center; margin-bottom: 4rem;">
                        <h1 style="font-size: 2.8rem; margin-bottom: 1rem;">{"About brightforge"}</h1>
                        <p style="font-size: 1.2rem; color: #5c6370; max-width: 720px; margin: 0 auto;">
                            {"The story, the principles, and the people behind the work."}
                        </p>
                    </div>

                    <section ref={story_ref} class="about-story">
                        <div class={classes!("story-visual", story_visible.class("slide-in-left"))}>
                            <div class="nm-card" style="padding: 1.5rem;">
                                <div class="story-portrait">{"Founding team"}</div>
                            </div>
                        </div>
                        <div class={classes!("story-copy", story_visible.class("slide-in-right"))}>
                            <h2>{"Our Story"}</h2>
                            <p>
                                {"brightforge started as two engineers tired of watching good \
                                  companies struggle with software that fit them badly. The fix, \
                                  we thought, was boring: listen carefully, build only what is \
                                  needed, and stand behind it."}
                            </p>
                            <p>
                                {"That approach turned out to be rarer than it should be. A \
                                  decade on, it has carried us from automation retrofits in \
                                  small workshops to cloud platforms processing millions of \
                                  events a day."}
                            </p>
                            <p>
                                {"We have stayed deliberately small: a senior team where the \
                                  people who scope your project are the ones who build it."}
                            </p>
                        </div>
                    </section>

                    <h2 class="about-section-title">{"Mission, Vision and Values"}</h2>
                    <div ref={pillars_ref} class="pillars-grid">
                        { for PILLARS.iter().enumerate().map(|(index, (title, body))| {
                            let entrance = if pillars_visible.is_revealed() {
                                match index {
                                    0 => "scale-in delay-1",
                                    1 => "scale-in delay-2",
                                    _ => "scale-in delay-3",
                                }
                            } else {
                                "reveal-hidden"
                            };
                            html! {
                                <div class={classes!("nm-card", "pillar-card", entrance)}>
                                    <h3>{ *title }</h3>
                                    <p>{ *body }</p>
                                </div>
                            }
                        }) }
                    </div>
                </div>

                <TeamSection
                    title="The Technical Team"
                    subtitle="Engineers with long experience across software, automation and infrastructure"
                />

                <div class="container">
                    <h2 class="about-section-title">{"What Sets Us Apart"}</h2>
                    <section ref={diff_ref}>
                        <div class={classes!("nm-card", "diff-panel", diff_visible.class("rise-in"))}>
                            <div class="diff-grid">
                                { for DIFFERENTIATORS.iter().map(|(title, body)| html! {
                                    <div class="diff-item">
                                        <div class="nm-icon">
                                            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24"
                                                fill="none" stroke="#e8a100" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                                <path d="M5 13l4 4 10-10" />
                                            </svg>
                                        </div>
                                        <div>
                                            <h3>{ *title }</h3>
                                            <p>{ *body }</p>
                                        </div>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </section>

                    <div class="about-cta">
                        <div class="nm-card">
                            <h2 style="margin-bottom: 1rem;">{"Shall we work together?"}</h2>
                            <p>
                                {"Get in touch to talk about how we can help turn your \
                                  technology challenges into room to grow."}
                            </p>
                            <Link<Route> to={Route::Contact} classes="nm-button nm-button-primary">
                                {"Talk to Us"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            </div>
            <Footer />
        </>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::reveal::use_reveal;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: String,
    pub subtitle: String,
    pub cta_text: String,
    pub cta_route: Route,
}

/// Full-height landing hero. The reveal still goes through the observer even
/// though the hero is on screen at mount; the initial intersection record
/// fires it immediately.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone());

    html! {
        <section ref={section_ref} class="hero-section">
            <style>
                {r#"
                    .hero-section {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        position: relative;
                        overflow: hidden;
                        padding: 6rem 0 4rem;
                    }
                    .hero-circle {
                        position: absolute;
                        border-radius: 50%;
                        opacity: 0.18;
                    }
                    .hero-circle.one {
                        top: 5rem; left: 2.5rem;
                        width: 160px; height: 160px;
                        background: #f3cf6b;
                    }
                    .hero-circle.two {
                        bottom: 5rem; right: 2.5rem;
                        width: 240px; height: 240px;
                        background: #9fd8a3;
                    }
                    .hero-inner {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 3rem;
                        position: relative;
                        z-index: 1;
                    }
                    .hero-copy { flex: 1 1 420px; }
                    .hero-copy h1 {
                        font-size: 3.2rem;
                        line-height: 1.15;
                        margin-bottom: 1.5rem;
                    }
                    .hero-copy p {
                        font-size: 1.25rem;
                        color: #5c6370;
                        margin-bottom: 2rem;
                        max-width: 520px;
                    }
                    .hero-visual { flex: 1 1 380px; }
                    .hero-panel {
                        padding: 2rem;
                        position: relative;
                    }
                    .hero-panel-screen {
                        aspect-ratio: 16 / 9;
                        border-radius: 14px;
                        background: linear-gradient(135deg, #f5f7fa, #dfe4ec);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    @keyframes floatY {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-10px); }
                    }
                    .hero-float {
                        position: absolute;
                        animation: floatY 3s ease-in-out infinite;
                    }
                    .hero-float.top { top: -1rem; left: -1rem; background: #e8a100; }
                    .hero-float.bottom {
                        bottom: -1rem; right: -1rem;
                        background: #3fa35a;
                        animation-delay: 0.4s;
                    }
                    @media (max-width: 768px) {
                        .hero-copy h1 { font-size: 2.2rem; }
                    }
                "#}
            </style>
            <div class="hero-circle one"></div>
            <div class="hero-circle two"></div>
            <div class="container hero-inner">
                <div class={classes!("hero-copy", visible.class("slide-in-left"))}>
                    <h1>
                        <span class="logo-accent">{"bright"}</span>
                        <span class="logo-rest">{"forge"}</span>
                        <br />
                        { &props.title }
                    </h1>
                    <p>{ &props.subtitle }</p>
                    <Link<Route> to={props.cta_route.clone()} classes="nm-button nm-button-primary">
                        { &props.cta_text }
                    </Link<Route>>
                </div>
                <div class={classes!("hero-visual", visible.class("slide-in-right"))}>
                    <div class="nm-card hero-panel">
                        <div class="hero-panel-screen">
                            <div class="nm-icon">
                                <svg xmlns="http://www.w3.org/2000/svg" width="36" height="36" viewBox="0 0 24 24"
                                    fill="none" stroke="#e8a100" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                    <path d="M4 5h16v10H4zM8 21h8M12 15v6" />
                                </svg>
                            </div>
                        </div>
                        <div class="nm-icon hero-float top">
                            <svg xmlns="http://www.w3.org/2000/svg" width="22" height="22" viewBox="0 0 24 24"
                                fill="none" stroke="#ffffff" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <path d="M12 3l8 4-8 4-8-4zM4 12l8 4 8-4M4 17l8 4 8-4" />
                            </svg>
                        </div>
                        <div class="nm-icon hero-float bottom">
                            <svg xmlns="http://www.w3.org/2000/svg" width="22" height="22" viewBox="0 0 24 24"
                                fill="none" stroke="#ffffff" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <path d="M13 2L5 13h5l-1 9 8-11h-5z" />
                            </svg>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

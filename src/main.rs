use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod reveal;
mod components {
    pub mod hero;
    pub mod services;
    pub mod portfolio;
    pub mod team;
    pub mod contact_form;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod services;
    pub mod about;
    pub mod portfolio;
    pub mod contact;
}

use pages::{
    home::Home,
    services::ServicesPage,
    about::About,
    portfolio::PortfolioPage,
    contact::Contact,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/about")]
    About,
    #[at("/portfolio")]
    Portfolio,
    #[at("/contact")]
    Contact,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <ServicesPage /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <PortfolioPage /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let window_clone = window.clone();

            let scroll_callback = Closure::wrap(Box::new(move || {
                if let Ok(scroll_y) = window_clone.scroll_y() {
                    is_scrolled.set(scroll_y > 50.0);
                }
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="logo-accent">{"bright"}</span>
                    <span class="logo-rest">{"forge"}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Services} classes="nav-link">
                            {"Services"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">
                            {"About Us"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Portfolio} classes="nav-link">
                            {"Portfolio"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Contact} classes="nav-contact-button">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>
                {r#"
                    * {
                        margin: 0;
                        padding: 0;
                        box-sizing: border-box;
                    }
                    body {
                        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                        background: #eef1f6;
                        color: #1a1a2e;
                    }
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 100;
                        padding: 1.2rem 0;
                        background: transparent;
                        transition: all 0.4s ease;
                    }
                    .top-nav.scrolled {
                        padding: 0.6rem 0;
                        background: rgba(238, 241, 246, 0.92);
                        backdrop-filter: blur(8px);
                        box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        font-size: 1.6rem;
                        font-weight: 800;
                        text-decoration: none;
                    }
                    .logo-accent { color: #e8a100; }
                    .logo-rest { color: #1a1a2e; }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .nav-link, .nav-contact-button {
                        padding: 0.5rem 1rem;
                        border-radius: 12px;
                        text-decoration: none;
                        color: #1a1a2e;
                        font-weight: 500;
                        transition: all 0.3s ease;
                    }
                    .nav-link:hover { color: #e8a100; }
                    .nav-contact-button {
                        background: #eef1f6;
                        box-shadow: 5px 5px 10px #ccd1d9, -5px -5px 10px #ffffff;
                    }
                    .nav-contact-button:hover {
                        color: #e8a100;
                        box-shadow: 7px 7px 14px #ccd1d9, -7px -7px 14px #ffffff;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 3px;
                        background: #1a1a2e;
                        border-radius: 2px;
                    }
                    .nm-card {
                        background: #eef1f6;
                        border-radius: 20px;
                        box-shadow: 8px 8px 16px #ccd1d9, -8px -8px 16px #ffffff;
                        transition: box-shadow 0.3s ease, transform 0.3s ease;
                    }
                    .nm-icon {
                        width: 60px;
                        height: 60px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #eef1f6;
                        box-shadow: 5px 5px 10px #ccd1d9, -5px -5px 10px #ffffff;
                        transition: transform 0.2s ease;
                    }
                    .nm-icon:hover { transform: scale(1.1) rotate(5deg); }
                    .nm-button {
                        display: inline-block;
                        padding: 0.75rem 1.5rem;
                        border-radius: 14px;
                        border: none;
                        background: #eef1f6;
                        color: #1a1a2e;
                        font-weight: 600;
                        font-size: 1rem;
                        text-decoration: none;
                        cursor: pointer;
                        box-shadow: 6px 6px 12px #ccd1d9, -6px -6px 12px #ffffff;
                        transition: all 0.3s ease;
                    }
                    .nm-button:hover {
                        transform: translateY(-3px);
                        box-shadow: 10px 10px 20px #ccd1d9, -10px -10px 20px #ffffff;
                    }
                    .nm-button:active { transform: scale(0.96); }
                    .nm-button-primary {
                        background: #e8a100;
                        color: #ffffff;
                    }
                    .nm-input {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border: none;
                        border-radius: 12px;
                        background: #eef1f6;
                        color: #1a1a2e;
                        font-size: 1rem;
                        box-shadow: inset 4px 4px 8px #ccd1d9, inset -4px -4px 8px #ffffff;
                        outline: none;
                    }
                    .section-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-heading h2 {
                        font-size: 2.4rem;
                        margin-bottom: 1rem;
                    }
                    .section-heading p {
                        font-size: 1.2rem;
                        color: #5c6370;
                        max-width: 640px;
                        margin: 0 auto;
                    }
                    .container {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    @keyframes riseIn {
                        from { transform: translateY(50px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    @keyframes dropIn {
                        from { transform: translateY(-50px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    @keyframes slideInLeft {
                        from { transform: translateX(-100px); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    @keyframes slideInRight {
                        from { transform: translateX(100px); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    @keyframes scaleIn {
                        from { transform: scale(0.85); opacity: 0; }
                        to { transform: scale(1); opacity: 1; }
                    }
                    .reveal-hidden { opacity: 0; }
                    .rise-in { animation: riseIn 0.7s ease-out both; }
                    .drop-in { animation: dropIn 0.7s ease-out both; }
                    .slide-in-left { animation: slideInLeft 0.8s ease-out both; }
                    .slide-in-right { animation: slideInRight 0.8s ease-out both; }
                    .scale-in { animation: scaleIn 0.6s ease-out both; }
                    .delay-1 { animation-delay: 0.1s; }
                    .delay-2 { animation-delay: 0.2s; }
                    .delay-3 { animation-delay: 0.3s; }
                    .delay-4 { animation-delay: 0.4s; }
                    .delay-5 { animation-delay: 0.5s; }
                    .delay-6 { animation-delay: 0.6s; }
                    @media (max-width: 768px) {
                        .burger-menu { display: flex; }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            width: 100%;
                            flex-direction: column;
                            background: #eef1f6;
                            padding: 1rem 0;
                            box-shadow: 0 8px 16px rgba(0, 0, 0, 0.1);
                        }
                        .nav-right.mobile-menu-open { display: flex; }
                    }
                "#}
            </style>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Better panic messages in the browser console
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

use yew::prelude::*;

use crate::components::contact_form::ContactSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::portfolio::PortfolioSection;
use crate::components::services::ServicesSection;
use crate::components::team::TeamSection;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
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
            <Hero
                title="Innovative Technology Solutions"
                subtitle="We build custom software, infrastructure, data and automation \
                          solutions that help your business grow."
                cta_text="Explore Our Services"
                cta_route={Route::Services}
            />
            <ServicesSection
                title="Our Services"
                subtitle="A full range of computer-engineering services shaped around \
                          what your business actually needs."
            />
            <PortfolioSection
                title="Our Portfolio"
                subtitle="Projects and success stories from the teams we have worked with"
            />
            <TeamSection />
            <ContactSection
                title="Get in Touch"
                subtitle="We are ready to help turn your ideas into working technology."
            />
            <Footer />
        </>
    }
}

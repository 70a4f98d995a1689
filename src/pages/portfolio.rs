use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::portfolio::PortfolioSection;

#[function_component(PortfolioPage)]
pub fn portfolio_page() -> Html {
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
            <div style="padding-top: 5rem;">
                <PortfolioSection
                    title="Our Portfolio"
                    subtitle="A cross-section of the projects we have shipped, and what \
                              the people behind them say about working with us"
                />
            </div>
            <Footer />
        </>
    }
}

use yew::prelude::*;

use crate::components::contact_form::ContactSection;
use crate::components::footer::Footer;

#[function_component(Contact)]
pub fn contact() -> Html {
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
                <ContactSection
                    title="Get in Touch"
                    subtitle="Fill in the form below and our team will get back to you \
                              as soon as possible."
                />
            </div>
            <Footer />
        </>
    }
}

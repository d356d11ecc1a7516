use yew::prelude::*;

use crate::app::use_site_config;
use crate::components::contact_form::ContactForm;
use crate::dates::DateRange;
use crate::theme::WHITE;

#[derive(Properties, PartialEq)]
pub struct ContactPageProps {
    pub range: DateRange,
}

#[function_component(ContactPage)]
pub fn contact_page(props: &ContactPageProps) -> Html {
    let cfg = use_site_config();

    html! {
        <section id="contatti" class="full-bleed page centered" style={format!("background-color:{WHITE};")}>
            <div class="narrow">
                <h2 class="font-display page-title">{ "Contatti" }</h2>
                <ul class="text-sm contact-list">
                    <li><strong>{ "Telefono:" }</strong>{ format!(" {}", cfg.contact_phone) }</li>
                    <li><strong>{ "Email:" }</strong>{ format!(" {}", cfg.contact_email) }</li>
                </ul>
                <ContactForm range={props.range} />
            </div>
        </section>
    }
}

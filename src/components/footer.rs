use chrono::Datelike;
use yew::prelude::*;

use crate::app::use_site_config;
use crate::dates::today;
use crate::route::Route;
use crate::theme::MUTED;

#[function_component(Footer)]
pub fn footer() -> Html {
    let cfg = use_site_config();

    html! {
        <footer class="site-footer" style={format!("border-color:{MUTED};")}>
            <div class="footer-row">
                <div>{ format!("© {} {}", today().year(), cfg.site_name) }</div>
                <div class="row">
                    <a class="hover-underline" href={Route::Contact.to_hash()}>{ "Contatti" }</a>
                    <a class="hover-underline" href="#">{ "Privacy" }</a>
                    <a class="hover-underline" href={Route::Home.to_hash()}>{ "Torna su" }</a>
                </div>
            </div>
        </footer>
    }
}

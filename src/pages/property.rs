use yew::prelude::*;

use crate::catalog;
use crate::components::range_picker::RangePicker;
use crate::dates::DateRange;
use crate::route::Route;
use crate::theme::{accent_button, PRIMARY, WHITE};

#[derive(Properties, PartialEq)]
pub struct PropertyPageProps {
    pub slug: AttrValue,
    /// This property's own range, independent of the home page one.
    pub range: DateRange,
    pub on_range: Callback<DateRange>,
}

#[function_component(PropertyPage)]
pub fn property_page(props: &PropertyPageProps) -> Html {
    let Some(p) = catalog::find(&props.slug) else {
        return html! {
            <section class="full-bleed page centered">
                <div class="center">
                    <h2 class="font-display page-title">{ "Struttura non trovata" }</h2>
                    <a class="underline" href={Route::Home.to_hash()}>{ "Torna alla homepage" }</a>
                </div>
            </section>
        };
    };

    html! {
        <section class="full-bleed page" style={format!("background-color:{WHITE};")}>
            <div class="page-body">
                <a href={Route::Home.to_hash()} class="text-sm underline">{ "← Torna alla homepage" }</a>
                <h1 class="font-display page-title" style={format!("color:{PRIMARY};")}>{ p.title }</h1>
                <p class="text-sm dim">{ p.details }</p>

                <div class="strip">
                    { for p.images.iter().enumerate().map(|(i, src)| html! {
                        <img key={i} class="strip-photo" src={*src} alt={format!("{} foto {}", p.title, i + 1)} />
                    }) }
                </div>

                <div class="booking">
                    <h3 class="font-display section-title">{ format!("Disponibilità — {}", p.title) }</h3>
                    <RangePicker range={props.range} on_select={props.on_range.clone()} />
                    <div class="cta">
                        <a href={Route::Contact.to_hash()} class="btn" style={accent_button()}>{ "Prenota ora" }</a>
                    </div>
                </div>
            </div>
        </section>
    }
}

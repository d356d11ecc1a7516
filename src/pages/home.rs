use yew::prelude::*;

use crate::app::use_site_config;
use crate::catalog::{HERO_IMAGE, PROPERTIES};
use crate::components::range_picker::RangePicker;
use crate::dates::DateRange;
use crate::route::Route;
use crate::theme::{accent_button, ACCENT, MUTED, PRIMARY, WHITE};

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub range: DateRange,
    pub on_range: Callback<DateRange>,
    /// Grid position of the clicked property.
    pub on_open_overview: Callback<usize>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let cfg = use_site_config();
    let rule = format!("border-color:{MUTED};");

    html! {
        <>
            <section id="home" class="hero">
                <div class="hero-bg">
                    <img class="hero-img" src={HERO_IMAGE} alt="Hero" />
                    <div class="hero-veil" />
                </div>
                <div class="hero-body">
                    <h1 class="font-display hero-title" style={format!("color:{PRIMARY};")}>
                        { "Benvenuti a " }
                        <span style={format!("color:{ACCENT};")}>{ cfg.site_name.clone() }</span>
                    </h1>
                    <p class="hero-text">{ cfg.tagline.clone() }</p>
                    <div class="row wrap">
                        <a href="#disponibilita" class="btn" style={accent_button()}>{ "Verifica disponibilità" }</a>
                        <a href={Route::Contact.to_hash()} class="btn btn-outline" style={rule.clone()}>{ "Contattaci" }</a>
                    </div>
                </div>
            </section>

            <section id="strutture" class="full-bleed section">
                <h2 class="font-display section-title">{ "Le Strutture" }</h2>
                <div class="card-grid">
                    { for PROPERTIES.iter().enumerate().map(|(i, p)| html! {
                        <button key={p.slug} class="card" onclick={props.on_open_overview.reform(move |_| i)}>
                            <div class="card-img" style={rule.clone()}>
                                <img src={p.cover()} alt={p.title} />
                            </div>
                            <div class="card-title" style={format!("color:{PRIMARY};")}>{ p.title }</div>
                            <div class="text-xs dim">{ "Clicca per dettagli" }</div>
                        </button>
                    }) }
                </div>
            </section>

            <section id="disponibilita" class="full-bleed section band" style={format!("{rule}background-color:{WHITE};")}>
                <div class="availability">
                    <h2 class="font-display section-title center">{ "Disponibilità" }</h2>
                    <p class="text-sm dim center">
                        { "Seleziona le date di " }<strong>{ "check‑in" }</strong>{ " e " }<strong>{ "check‑out" }</strong>{ "." }
                    </p>
                    <RangePicker range={props.range} on_select={props.on_range.clone()} />
                </div>
            </section>

            <section id="dovesiamo" class="full-bleed section band-top" style={rule.clone()}>
                <h2 class="font-display section-title">{ "Dove Siamo" }</h2>
                <p class="text-sm dim">{ "XXXXX" }</p>
                <div class="map-wrap">
                    <div class="map-frame" style={rule.clone()}>
                        <iframe
                            title={format!("Mappa: {}", cfg.map_query)}
                            width="100%"
                            height="360"
                            loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade"
                            src={cfg.map_embed_url()}
                        />
                    </div>
                    <div class="text-xs dim center">{ format!("Destinazione: {}", cfg.map_query) }</div>
                    <div class="center">
                        <a href={cfg.map_directions_url()} target="_blank" rel="noreferrer" class="underline">
                            { "Apri indicazioni su Google Maps" }
                        </a>
                    </div>
                </div>
            </section>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn availability_shows_selected_stay() {
        let from = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        let html = ServerRenderer::<HomePage>::with_props(move || HomePageProps {
            range: DateRange::default().select(from).select(to),
            on_range: Callback::from(|_| ()),
            on_open_overview: Callback::from(|_| ()),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains(r#"id="disponibilita""#));
        assert!(html.contains("Dal 10 giugno 2025 al 14 giugno 2025"));
        assert_eq!(html.matches(r#"class="card""#).count(), PROPERTIES.len());
    }
}

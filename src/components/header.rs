use yew::prelude::*;

use crate::app::use_site_config;
use crate::catalog::PROPERTIES;
use crate::route::Route;
use crate::theme::{ACCENT, BG, MUTED};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub menu_open: bool,
    pub structures_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_close_menu: Callback<()>,
    pub on_toggle_structures: Callback<()>,
    pub on_open_property: Callback<String>,
}

/// Sticky brand bar with the hamburger and its slide-in menu.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let cfg = use_site_config();
    let close = props.on_close_menu.reform(|_: MouseEvent| ());
    let badge = format!("background-color:{ACCENT};color:{BG};");
    let rule = format!("border-color:{MUTED};");

    let menu = if props.menu_open {
        html! {
            <div class="drawer" role="dialog" aria-modal="true">
                <div class="backdrop" onclick={close.clone()} />
                <aside class="drawer-panel" style={format!("background-color:{BG};border-left:1px solid {MUTED};")}>
                    <div class="drawer-head">
                        <strong>{ "Menu" }</strong>
                        <button class="drawer-close" aria-label="Chiudi" onclick={close.clone()}>{ "×" }</button>
                    </div>
                    <nav class="drawer-nav">
                        <a href={Route::Home.to_hash()} class="menu-link" style={rule.clone()} onclick={close.clone()}>{ "Homepage" }</a>
                        <button
                            class="menu-link menu-toggle"
                            style={rule.clone()}
                            onclick={props.on_toggle_structures.reform(|_| ())}
                        >
                            <span>{ "Le Strutture" }</span>
                            <span>{ if props.structures_open { "▴" } else { "▾" } }</span>
                        </button>
                        if props.structures_open {
                            <div class="submenu">
                                { for PROPERTIES.iter().map(|p| {
                                    let slug = p.slug;
                                    let onclick = props.on_open_property.reform(move |e: MouseEvent| {
                                        e.prevent_default();
                                        slug.to_string()
                                    });
                                    html! {
                                        <a key={slug} href={Route::structure(slug).to_hash()} class="menu-link" style={rule.clone()} {onclick}>
                                            { p.title }
                                        </a>
                                    }
                                }) }
                            </div>
                        }
                        <a href={Route::Gallery.to_hash()} class="menu-link" style={rule.clone()} onclick={close.clone()}>{ "Galleria" }</a>
                        <a href={Route::Contact.to_hash()} class="menu-link last" onclick={close}>{ "Contatti" }</a>
                    </nav>
                </aside>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <header class="site-header" style={format!("border-color:{MUTED};")}>
            <div class="bar">
                <a href={Route::Home.to_hash()} class="brand">
                    <span class="brand-badge" style={badge.clone()}>{ "LO" }</span>
                    <div>
                        <div class="brand-name">{ cfg.site_name.clone() }</div>
                        <div class="brand-sub">{ cfg.locality.clone() }</div>
                    </div>
                </a>
                <button class="hamburger" aria-label="Apri menu" style={badge} onclick={props.on_toggle_menu.reform(|_| ())}>
                    { "☰" }
                </button>
            </div>
            { menu }
        </header>
    }
}

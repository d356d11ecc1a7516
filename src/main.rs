// src/main.rs — L'Ontano sulle Alpi (Rust + Yew + WASM)
// One-page site with hash routing:
//   #/                 home (hero, properties, availability, map)
//   #/galleria         photo gallery + lightbox
//   #/contatti         contact details + booking request form
//   #/strutture/:slug  property page with its own calendar

mod app;
mod carousel;
mod catalog;
mod components;
mod config;
mod contact;
mod dates;
mod error;
mod pages;
mod route;
mod shell;
mod theme;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("starting L'Ontano sulle Alpi");

    yew::Renderer::<app::App>::new().render();
}

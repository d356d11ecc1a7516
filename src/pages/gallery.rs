use yew::prelude::*;

use crate::catalog::GALLERY_IMAGES;

#[derive(Properties, PartialEq)]
pub struct GalleryPageProps {
    pub on_open: Callback<usize>,
}

#[function_component(GalleryPage)]
pub fn gallery_page(props: &GalleryPageProps) -> Html {
    html! {
        <section id="galleria" class="full-bleed page">
            <div class="page-head">
                <h2 class="font-display section-title">{ "Galleria" }</h2>
                <span class="text-sm dim">{ "Clicca una foto per aprirla" }</span>
            </div>
            <div class="strip">
                { for GALLERY_IMAGES.iter().enumerate().map(|(i, src)| html! {
                    <button key={i} class="strip-item" onclick={props.on_open.reform(move |_| i)}>
                        <img src={*src} alt={format!("Foto {}", i + 1)} />
                    </button>
                }) }
            </div>
        </section>
    }
}

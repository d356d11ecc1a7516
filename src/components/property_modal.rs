use yew::prelude::*;

use crate::carousel::Carousel;
use crate::catalog::Property;
use crate::components::modal::{ModalFrame, Slideshow};
use crate::route::Route;
use crate::theme::{MUTED, PRIMARY};

#[derive(Properties, PartialEq)]
pub struct PropertyModalProps {
    pub property: &'static Property,
    pub cursor: Carousel,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_jump: Callback<usize>,
    pub on_close: Callback<()>,
    /// "Scopri di più": go to the property page.
    pub on_more: Callback<()>,
}

/// Quick look from the home grid: photos on the left, blurb and thumbnails on the right.
#[function_component(PropertyModal)]
pub fn property_modal(props: &PropertyModalProps) -> Html {
    let p = props.property;
    let current = props.cursor.index();

    html! {
        <ModalFrame on_close={props.on_close.clone()}>
            <div class="overview">
                <div class="overview-photos">
                    <Slideshow
                        images={p.images}
                        cursor={props.cursor}
                        alt={format!("{} immagine", p.title)}
                        height="60vh"
                        on_prev={props.on_prev.clone()}
                        on_next={props.on_next.clone()}
                    />
                </div>
                <div class="overview-side">
                    <h3 class="font-display overview-title" style={format!("color:{PRIMARY};")}>{ p.title }</h3>
                    <p class="text-sm dim">{ p.summary }</p>
                    <div class="row">
                        <a class="underline pointer" onclick={props.on_more.reform(|_| ())}>{ "Scopri di più" }</a>
                        <a class="underline" href={Route::Contact.to_hash()}>{ "Prenota ora" }</a>
                    </div>
                    <div class="thumbs">
                        { for p.images.iter().enumerate().map(|(i, src)| html! {
                            <button
                                key={i}
                                class={classes!("thumb", (i == current).then_some("active"))}
                                style={format!("border-color:{MUTED};")}
                                onclick={props.on_jump.reform(move |_| i)}
                            >
                                <img src={*src} alt={format!("thumb {}", i + 1)} />
                            </button>
                        }) }
                    </div>
                </div>
            </div>
        </ModalFrame>
    }
}

use yew::prelude::*;

use crate::carousel::Carousel;
use crate::theme::{BG, WHITE};

#[derive(Properties, PartialEq)]
pub struct ModalFrameProps {
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Dimmed backdrop + centered panel. Clicking the backdrop or × closes.
#[function_component(ModalFrame)]
pub fn modal_frame(props: &ModalFrameProps) -> Html {
    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="modal" role="dialog" aria-modal="true">
            <div class="backdrop backdrop-dark" onclick={close.clone()} />
            <div class="modal-panel" style={format!("background-color:{WHITE};")}>
                <button
                    class="modal-close"
                    aria-label="Chiudi"
                    style={format!("background-color:{BG};")}
                    onclick={close}
                >
                    { "×" }
                </button>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SlideshowProps {
    pub images: &'static [&'static str],
    pub cursor: Carousel,
    /// Alt text prefix; the 1-based position is appended.
    pub alt: AttrValue,
    pub height: &'static str,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

#[function_component(Slideshow)]
pub fn slideshow(props: &SlideshowProps) -> Html {
    let i = props.cursor.index();
    let src = props.images.get(i).copied().unwrap_or_default();
    let chip = format!("background-color:{BG};");

    html! {
        <div class="slideshow">
            <img
                class="slide"
                src={src}
                alt={format!("{} {}", props.alt, i + 1)}
                style={format!("height:{};", props.height)}
            />
            <div class="slide-controls">
                <button class="chip" style={chip.clone()} onclick={props.on_prev.reform(|_| ())}>
                    { "‹ Prev" }
                </button>
                <div class="chip small" style={chip.clone()}>{ props.cursor.counter() }</div>
                <button class="chip" style={chip} onclick={props.on_next.reform(|_| ())}>
                    { "Next ›" }
                </button>
            </div>
        </div>
    }
}

use yew::prelude::*;

use crate::carousel::Carousel;
use crate::catalog::GALLERY_IMAGES;
use crate::components::modal::{ModalFrame, Slideshow};

#[derive(Properties, PartialEq)]
pub struct GalleryModalProps {
    pub cursor: Carousel,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(GalleryModal)]
pub fn gallery_modal(props: &GalleryModalProps) -> Html {
    html! {
        <ModalFrame on_close={props.on_close.clone()}>
            <Slideshow
                images={GALLERY_IMAGES}
                cursor={props.cursor}
                alt="Galleria immagine"
                height="70vh"
                on_prev={props.on_prev.clone()}
                on_next={props.on_next.clone()}
            />
        </ModalFrame>
    }
}

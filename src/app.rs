use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{window, Element};
use yew::prelude::*;

use crate::catalog;
use crate::components::footer::Footer;
use crate::components::gallery_modal::GalleryModal;
use crate::components::header::Header;
use crate::components::property_modal::PropertyModal;
use crate::config::SiteConfig;
use crate::dates::DateRange;
use crate::error::SiteError;
use crate::pages::contact::ContactPage;
use crate::pages::gallery::GalleryPage;
use crate::pages::home::HomePage;
use crate::pages::property::PropertyPage;
use crate::route::{self, current_route, Route};
use crate::shell::{Action, Modal, ViewState};
use crate::theme::{BG, FONT_PRECONNECT, FONT_STYLESHEET, PRIMARY};

#[hook]
pub fn use_site_config() -> Rc<SiteConfig> {
    use_context::<Rc<SiteConfig>>().unwrap_or_default()
}

fn font_links() -> Result<Vec<Element>, SiteError> {
    let doc = window()
        .and_then(|w| w.document())
        .ok_or(SiteError::Unavailable("document"))?;
    let head = doc.head().ok_or(SiteError::Unavailable("<head>"))?;

    let mut links = Vec::with_capacity(FONT_PRECONNECT.len() + 1);
    for &(href, crossorigin) in FONT_PRECONNECT.iter() {
        let link = doc.create_element("link")?;
        link.set_attribute("rel", "preconnect")?;
        link.set_attribute("href", href)?;
        if crossorigin {
            link.set_attribute("crossorigin", "")?;
        }
        links.push(link);
    }
    let sheet = doc.create_element("link")?;
    sheet.set_attribute("rel", "stylesheet")?;
    sheet.set_attribute("href", FONT_STYLESHEET)?;
    links.push(sheet);

    for link in &links {
        head.append_child(link)?;
    }
    Ok(links)
}

/// Keyed by slug so moving between properties remounts the page and its
/// calendar instead of carrying the displayed month across.
fn property_view(slug: &str, range: DateRange, on_range: Callback<DateRange>) -> Html {
    html! {
        <PropertyPage key={slug} slug={slug.to_string()} {range} {on_range} />
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| SiteConfig::load());
    let state = use_reducer(|| ViewState::new(current_route()));

    // Route follows the fragment for as long as the app is mounted.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|w| {
                EventListener::new(&w, "hashchange", move |_| {
                    state.dispatch(Action::RouteChanged(current_route()));
                })
            });
            if listener.is_none() {
                log::warn!("no window: hash routing disabled");
            }
            move || drop(listener)
        });
    }

    // Web fonts live in <head> only while the app does.
    use_effect_with((), |_| {
        let links = font_links().unwrap_or_else(|e| {
            log::warn!("font links not injected: {e}");
            Vec::new()
        });
        move || links.iter().for_each(Element::remove)
    });

    let dispatch = |action: Action| {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(action.clone()))
    };

    let on_open_property = {
        let state = state.clone();
        Callback::from(move |slug: String| {
            if let Err(e) = route::navigate(&Route::Structure { slug }) {
                log::warn!("navigation failed: {e}");
            }
            state.dispatch(Action::Navigated);
        })
    };

    let page = match &state.route {
        Route::Home => {
            let on_range = {
                let state = state.clone();
                Callback::from(move |r: DateRange| state.dispatch(Action::SetHomeRange(r)))
            };
            let on_open_overview = {
                let state = state.clone();
                Callback::from(move |i: usize| state.dispatch(Action::OpenPropertyOverview(i)))
            };
            html! { <HomePage range={state.home_range} {on_range} {on_open_overview} /> }
        }
        Route::Gallery => {
            let on_open = {
                let state = state.clone();
                Callback::from(move |i: usize| state.dispatch(Action::OpenGallery(i)))
            };
            html! { <GalleryPage {on_open} /> }
        }
        Route::Contact => html! { <ContactPage range={state.home_range} /> },
        Route::Structure { slug } => {
            let on_range = {
                let state = state.clone();
                let slug = slug.clone();
                Callback::from(move |range: DateRange| {
                    state.dispatch(Action::SetPropertyRange { slug: slug.clone(), range })
                })
            };
            property_view(slug, state.range_for(slug), on_range)
        }
    };

    let on_jump = {
        let state = state.clone();
        Callback::from(move |i: usize| state.dispatch(Action::ModalJumpTo(i)))
    };

    let modal = match state.modal {
        Modal::None => html! {},
        Modal::Gallery => html! {
            <GalleryModal
                cursor={state.gallery}
                on_prev={dispatch(Action::ModalPrevious)}
                on_next={dispatch(Action::ModalNext)}
                on_close={dispatch(Action::CloseModal)}
            />
        },
        Modal::PropertyOverview(i) => match catalog::get(i) {
            Some(property) => {
                let on_more = on_open_property.reform(move |_| property.slug.to_string());
                html! {
                    <PropertyModal
                        {property}
                        cursor={state.overview}
                        on_prev={dispatch(Action::ModalPrevious)}
                        on_next={dispatch(Action::ModalNext)}
                        {on_jump}
                        on_close={dispatch(Action::CloseModal)}
                        {on_more}
                    />
                }
            }
            None => html! {},
        },
    };

    html! {
        <ContextProvider<Rc<SiteConfig>> context={config.clone()}>
            <div class="site" style={format!("background-color:{BG};color:{PRIMARY};")}>
                <Header
                    menu_open={state.menu_open}
                    structures_open={state.structures_menu_open}
                    on_toggle_menu={dispatch(Action::ToggleMenu)}
                    on_close_menu={dispatch(Action::CloseMenu)}
                    on_toggle_structures={dispatch(Action::ToggleStructuresMenu)}
                    on_open_property={on_open_property.clone()}
                />
                <main>{ page }</main>
                <Footer />
                { modal }
            </div>
        </ContextProvider<Rc<SiteConfig>>>
    }
}

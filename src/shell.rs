//! Top-level view state. Every change goes through one of the named
//! transitions below; the `Reducible` impl only routes [`Action`]s to them.

use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use yew::functional::Reducible;

use crate::carousel::Carousel;
use crate::catalog;
use crate::dates::DateRange;
use crate::route::Route;

/// At most one overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum Modal {
    None,
    Gallery,
    /// Grid position of the property in the catalog.
    PropertyOverview(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub route: Route,
    pub menu_open: bool,
    pub structures_menu_open: bool,
    pub modal: Modal,
    /// Lightbox cursor for the gallery page; kept while the modal is closed.
    pub gallery: Carousel,
    /// Photo cursor inside the property overview modal.
    pub overview: Carousel,
    pub home_range: DateRange,
    property_ranges: HashMap<String, DateRange>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    RouteChanged(Route),
    ToggleMenu,
    CloseMenu,
    ToggleStructuresMenu,
    /// Reducer half of a navigation: the caller has already set `location.hash`.
    Navigated,
    OpenGallery(usize),
    OpenPropertyOverview(usize),
    CloseModal,
    ModalNext,
    ModalPrevious,
    ModalJumpTo(usize),
    SetHomeRange(DateRange),
    SetPropertyRange { slug: String, range: DateRange },
}

impl ViewState {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            menu_open: false,
            structures_menu_open: false,
            modal: Modal::None,
            gallery: Carousel::new(catalog::GALLERY_IMAGES.len()),
            overview: Carousel::new(1),
            home_range: DateRange::default(),
            property_ranges: HashMap::new(),
        }
    }

    pub fn set_route(&mut self, route: Route) {
        if route != self.route {
            self.close_transient();
        }
        self.route = route;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
        self.structures_menu_open = false;
    }

    pub fn toggle_structures_menu(&mut self) {
        self.structures_menu_open = !self.structures_menu_open;
    }

    /// Menu, submenu and any modal all go away when the page changes.
    pub fn close_transient(&mut self) {
        self.close_menu();
        self.close_modal();
    }

    pub fn open_gallery(&mut self, index: usize) {
        self.gallery = self.gallery.jump_to(index);
        self.modal = Modal::Gallery;
    }

    pub fn open_property_overview(&mut self, index: usize) {
        let Some(p) = catalog::get(index) else {
            log::warn!("no property at grid position {index}");
            return;
        };
        self.overview = Carousel::new(p.images.len());
        self.modal = Modal::PropertyOverview(index);
    }

    /// Leaves the cursors untouched.
    pub fn close_modal(&mut self) {
        self.modal = Modal::None;
    }

    fn active_carousel(&mut self) -> Option<&mut Carousel> {
        match self.modal {
            Modal::None => None,
            Modal::Gallery => Some(&mut self.gallery),
            Modal::PropertyOverview(_) => Some(&mut self.overview),
        }
    }

    pub fn modal_next(&mut self) {
        if let Some(c) = self.active_carousel() {
            *c = c.next();
        }
    }

    pub fn modal_previous(&mut self) {
        if let Some(c) = self.active_carousel() {
            *c = c.previous();
        }
    }

    pub fn modal_jump_to(&mut self, index: usize) {
        if let Some(c) = self.active_carousel() {
            *c = c.jump_to(index);
        }
    }

    pub fn set_home_range(&mut self, range: DateRange) {
        self.home_range = range;
    }

    /// Stored range for `slug`, or an empty one if nothing was picked yet.
    pub fn range_for(&self, slug: &str) -> DateRange {
        self.property_ranges.get(slug).copied().unwrap_or_default()
    }

    pub fn set_property_range(&mut self, slug: String, range: DateRange) {
        self.property_ranges.insert(slug, range);
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::RouteChanged(route) => self.set_route(route),
            Action::ToggleMenu => self.toggle_menu(),
            Action::CloseMenu => self.close_menu(),
            Action::ToggleStructuresMenu => self.toggle_structures_menu(),
            Action::Navigated => self.close_transient(),
            Action::OpenGallery(i) => self.open_gallery(i),
            Action::OpenPropertyOverview(i) => self.open_property_overview(i),
            Action::CloseModal => self.close_modal(),
            Action::ModalNext => self.modal_next(),
            Action::ModalPrevious => self.modal_previous(),
            Action::ModalJumpTo(i) => self.modal_jump_to(i),
            Action::SetHomeRange(r) => self.set_home_range(r),
            Action::SetPropertyRange { slug, range } => self.set_property_range(slug, range),
        }
    }
}

impl Reducible for ViewState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        log::debug!("shell: {action:?}");
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::parse_hash;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn home() -> ViewState {
        ViewState::new(Route::Home)
    }

    #[test]
    fn gallery_thumbnail_opens_at_index_and_wraps() {
        let mut s = ViewState::new(Route::Gallery);
        s.apply(Action::OpenGallery(3));
        assert_eq!(s.modal, Modal::Gallery);
        assert_eq!(s.gallery.index(), 3);

        s.apply(Action::ModalJumpTo(catalog::GALLERY_IMAGES.len() - 1));
        for _ in 0..3 {
            s.apply(Action::ModalNext);
        }
        assert_eq!(s.gallery.index(), 2);
    }

    #[test]
    fn closing_keeps_gallery_index() {
        let mut s = ViewState::new(Route::Gallery);
        s.open_gallery(2);
        s.modal_next();
        s.close_modal();
        assert_eq!(s.modal, Modal::None);
        assert_eq!(s.gallery.index(), 3);
    }

    #[test]
    fn modals_are_exclusive() {
        let mut s = home();
        s.open_gallery(1);
        s.open_property_overview(2);
        assert_eq!(s.modal, Modal::PropertyOverview(2));
        s.open_gallery(0);
        assert_eq!(s.modal, Modal::Gallery);
    }

    #[test]
    fn overview_starts_on_first_photo() {
        let mut s = home();
        s.open_property_overview(1);
        s.modal_next();
        s.modal_next();
        assert_eq!(s.overview.index(), 2);
        s.modal_next();
        assert_eq!(s.overview.index(), 0);

        s.close_modal();
        s.open_property_overview(0);
        assert_eq!(s.overview.index(), 0);
    }

    #[test]
    fn overview_ignores_unknown_position() {
        let mut s = home();
        s.open_property_overview(99);
        assert_eq!(s.modal, Modal::None);
    }

    #[test]
    fn carousel_moves_do_nothing_without_modal() {
        let mut s = home();
        s.modal_next();
        s.modal_previous();
        assert_eq!(s.gallery.index(), 0);
        assert_eq!(s.overview.index(), 0);
    }

    #[test]
    fn property_ranges_are_independent() {
        let mut s = home();
        let a = DateRange::default().select(d(2025, 7, 1));
        let b = DateRange::default().select(d(2025, 8, 1)).select(d(2025, 8, 5));
        s.set_property_range("b".into(), b);
        s.apply(Action::SetPropertyRange { slug: "a".into(), range: a });

        assert_eq!(s.range_for("a"), a);
        assert_eq!(s.range_for("b"), b);
        assert_eq!(s.range_for("c"), DateRange::default());
        assert_eq!(s.home_range, DateRange::default());
    }

    #[test]
    fn property_range_is_replaced_not_merged() {
        let mut s = home();
        let full = DateRange::default().select(d(2025, 7, 1)).select(d(2025, 7, 3));
        s.set_property_range("a".into(), full);
        let restart = full.select(d(2025, 9, 9));
        s.set_property_range("a".into(), restart);
        assert_eq!(s.range_for("a").check_out(), None);
    }

    #[test]
    fn navigation_closes_menu_and_modal() {
        let mut s = home();
        s.toggle_menu();
        s.toggle_structures_menu();
        s.open_property_overview(0);
        s.apply(Action::Navigated);
        assert!(!s.menu_open);
        assert!(!s.structures_menu_open);
        assert_eq!(s.modal, Modal::None);
    }

    #[test]
    fn route_change_closes_overlays() {
        let mut s = home();
        s.toggle_menu();
        s.open_gallery(1);
        s.apply(Action::RouteChanged(parse_hash("#/strutture/b")));
        assert_eq!(s.route, Route::structure("b"));
        assert!(!s.menu_open);
        assert_eq!(s.modal, Modal::None);
    }

    #[test]
    fn structure_route_resolves_against_catalog() {
        let mut s = home();
        s.apply(Action::RouteChanged(parse_hash("#/strutture/b")));
        let Route::Structure { slug } = &s.route else {
            panic!("expected a structure route, got {:?}", s.route);
        };
        let p = catalog::find(slug).unwrap();
        assert_eq!(p.title, "Struttura B");
        assert_eq!(p.images.len(), 3);
        assert_eq!(s.range_for(slug), DateRange::default());
    }

    #[test]
    fn unknown_structure_route_has_no_catalog_entry() {
        let mut s = home();
        s.apply(Action::RouteChanged(parse_hash("#/strutture/nessuna")));
        assert_eq!(s.route, Route::structure("nessuna"));
        assert!(catalog::find("nessuna").is_none());
    }

    #[test]
    fn same_route_keeps_overlays() {
        let mut s = ViewState::new(Route::Gallery);
        s.open_gallery(1);
        s.apply(Action::RouteChanged(Route::Gallery));
        assert_eq!(s.modal, Modal::Gallery);
    }

    #[test]
    fn close_menu_also_folds_submenu() {
        let mut s = home();
        s.toggle_menu();
        s.toggle_structures_menu();
        s.apply(Action::CloseMenu);
        assert!(!s.menu_open && !s.structures_menu_open);
    }

    #[test]
    fn reducer_returns_new_state() {
        let s = Rc::new(home());
        let next = s.clone().reduce(Action::ToggleMenu);
        assert!(!s.menu_open);
        assert!(next.menu_open);
    }

    #[test]
    fn view_state_serializes() {
        let mut s = home();
        s.set_home_range(DateRange::default().select(d(2025, 6, 10)));
        s.open_property_overview(1);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["route"]["page"], "home");
        assert_eq!(json["modal"]["kind"], "property_overview");
        assert_eq!(json["modal"]["index"], 1);
        assert_eq!(json["home_range"]["from"], "2025-06-10");
    }
}

use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::catalog::{self, Collection};
use crate::config;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(AttrValue),
}

impl Lightbox {
    pub fn image(&self) -> Option<&AttrValue> {
        match self {
            Lightbox::Closed => None,
            Lightbox::Open(url) => Some(url),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open(_))
    }
}

pub enum ViewAction {
    SelectCollection(AttrValue),
    OpenImage(AttrValue),
    CloseImage,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub active_collection_key: AttrValue,
    pub lightbox: Lightbox,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_collection_key: AttrValue::Static(config::DEFAULT_COLLECTION_KEY),
            lightbox: Lightbox::Closed,
        }
    }
}

impl ViewState {
    // The key is stored as given; an unknown key only resolves to the
    // first collection when read back through `active_collection`.
    pub fn select_collection(&mut self, key: AttrValue) {
        info!("Selecting collection {}", &*key);
        self.active_collection_key = key;
    }

    pub fn open_image(&mut self, url: AttrValue) {
        info!("Opening {} in lightbox", &*url);
        self.lightbox = Lightbox::Open(url);
    }

    pub fn close_image(&mut self) {
        if self.lightbox.is_open() {
            info!("Closing lightbox");
        }
        self.lightbox = Lightbox::Closed;
    }

    pub fn active_image(&self) -> Option<&AttrValue> {
        self.lightbox.image()
    }

    pub fn active_collection(&self) -> Option<&'static Collection> {
        catalog::find_or_first(catalog::collections(), &self.active_collection_key)
    }
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ViewAction::SelectCollection(key) => next.select_collection(key),
            ViewAction::OpenImage(url) => next.open_image(url),
            ViewAction::CloseImage => next.close_image(),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery;

    fn reduce(state: Rc<ViewState>, action: ViewAction) -> Rc<ViewState> {
        state.reduce(action)
    }

    #[test]
    fn starts_on_default_collection_with_lightbox_closed() {
        let state = ViewState::default();
        assert_eq!(&*state.active_collection_key, "hitmen-scab");
        assert_eq!(state.active_image(), None);
        assert_eq!(state.active_collection().unwrap().location, "Portsmouth · 2025");
    }

    #[test]
    fn selecting_second_tab_switches_location_and_thumbnails() {
        let state = reduce(
            Rc::new(ViewState::default()),
            ViewAction::SelectCollection(AttrValue::Static("esdee-rico")),
        );
        let active = state.active_collection().unwrap();
        assert_eq!(active.location, "London · 2025");
        assert_eq!(gallery::thumbnails(active).count(), 17);
    }

    #[test]
    fn unknown_key_is_stored_but_reads_as_first() {
        let mut state = ViewState::default();
        state.select_collection(AttrValue::Static("esdee-rico"));
        state.select_collection(AttrValue::from("nope".to_string()));
        assert_eq!(&*state.active_collection_key, "nope");
        assert_eq!(state.active_collection().unwrap().key, "hitmen-scab");
    }

    #[test]
    fn open_then_close_clears_active_image() {
        let mut state = ViewState::default();
        state.open_image(AttrValue::Static("https://example.com/a.jpg"));
        assert!(state.lightbox.is_open());
        state.close_image();
        assert_eq!(state.active_image(), None);
        assert_eq!(state.lightbox, Lightbox::Closed);
    }

    #[test]
    fn clicking_first_thumbnail_opens_its_url() {
        let state = Rc::new(ViewState::default());
        let first = gallery::thumbnails(state.active_collection().unwrap())
            .next()
            .unwrap();
        let state = reduce(state, ViewAction::OpenImage(first.url.clone()));
        assert_eq!(state.active_image(), Some(&first.url));

        let state = reduce(state, ViewAction::CloseImage);
        assert!(!state.lightbox.is_open());
    }

    #[test]
    fn closing_when_closed_keeps_same_state() {
        let state = Rc::new(ViewState::default());
        let next = reduce(state.clone(), ViewAction::CloseImage);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn open_image_does_not_touch_collection() {
        let mut state = ViewState::default();
        state.select_collection(AttrValue::Static("esdee-rico"));
        state.open_image(AttrValue::Static("https://elsewhere.example/x.jpg"));
        assert_eq!(&*state.active_collection_key, "esdee-rico");
    }
}

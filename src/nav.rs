use crate::constants::*;
use crate::dom;
use crate::events::EventListener;
use folio_core::{FrameSignals, MenuState, NavConfig, NavState, SectionBounds};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Navbar, section links and the scroll-to-top button, driven by scroll.
pub struct NavView {
    navbar: Option<web::Element>,
    links: Vec<(web::Element, String)>,
    sections: Vec<web::Element>,
    scroll_top: Option<web::Element>,
    cfg: NavConfig,
    state: NavState,
    primed: bool,
}

impl NavView {
    pub fn new(document: &web::Document, cfg: NavConfig) -> Self {
        let links = dom::query_all(document, NAV_LINK_SELECTOR)
            .into_iter()
            .filter_map(|el| {
                let href = el.get_attribute("href")?;
                Some((el, href))
            })
            .collect::<Vec<_>>();
        let sections = dom::query_all(document, SECTION_SELECTOR);
        log::info!(
            "[nav] links={} sections={}",
            links.len(),
            sections.len()
        );
        Self {
            navbar: dom::by_id(document, NAVBAR_ID),
            links,
            sections,
            scroll_top: dom::by_id(document, SCROLL_TOP_ID),
            cfg,
            state: NavState::default(),
            primed: false,
        }
    }

    fn bounds(&self) -> Vec<SectionBounds> {
        self.sections
            .iter()
            .filter_map(|el| {
                let (top, height) = dom::offset_box(el)?;
                Some(SectionBounds {
                    id: el.id(),
                    top,
                    height,
                })
            })
            .collect()
    }

    pub fn update(&mut self, s: &FrameSignals) {
        if !s.scroll_changed {
            return;
        }
        let bounds = self.bounds();
        let changed = self.state.update(s.scroll.offset, &bounds, &self.cfg);
        if !changed && self.primed {
            return;
        }
        self.primed = true;
        if let Some(nav) = &self.navbar {
            dom::set_class(nav, NAV_SCROLLED_CLASS, self.state.scrolled);
        }
        if let Some(btn) = &self.scroll_top {
            dom::set_class(btn, SCROLL_TOP_VISIBLE_CLASS, self.state.show_scroll_top);
        }
        for (el, href) in &self.links {
            dom::set_class(el, NAV_ACTIVE_CLASS, self.state.is_link_active(href));
        }
        log::debug!("[nav] active={:?}", self.state.active);
    }
}

fn scroll_to_top(window: &web::Window) {
    let opts = web::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

fn show_menu(menu: &Option<web::Element>, open: bool) {
    if let Some(m) = menu {
        dom::set_class(m, MENU_OPEN_CLASS, open);
    }
}

/// Click handlers for the scroll-to-top button and the mobile menu.
pub fn bind_controls(
    window: &web::Window,
    document: &web::Document,
) -> anyhow::Result<Vec<EventListener>> {
    let mut listeners = Vec::new();

    if let Some(btn) = dom::by_id(document, SCROLL_TOP_ID) {
        let w = window.clone();
        listeners.push(EventListener::new(btn.unchecked_ref(), "click", move |_| {
            scroll_to_top(&w);
        })?);
    }

    let menu = dom::by_id(document, MOBILE_MENU_ID);
    let state = Rc::new(RefCell::new(MenuState::default()));
    if let Some(toggle) = dom::by_id(document, MENU_TOGGLE_ID) {
        let state = state.clone();
        let menu = menu.clone();
        listeners.push(EventListener::new(
            toggle.unchecked_ref(),
            "click",
            move |_| {
                let open = state.borrow_mut().toggle();
                show_menu(&menu, open);
            },
        )?);
    }
    for link in dom::query_all(document, MOBILE_LINK_SELECTOR) {
        let state = state.clone();
        let menu = menu.clone();
        listeners.push(EventListener::new(link.unchecked_ref(), "click", move |_| {
            state.borrow_mut().link_followed();
            show_menu(&menu, false);
        })?);
    }
    Ok(listeners)
}

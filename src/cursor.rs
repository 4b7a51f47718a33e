use crate::constants::*;
use crate::dom;
use folio_core::{CursorState, FrameSignals};
use glam::Vec2;
use web_sys as web;

/// Custom cursor ring plus its centre dot. Both are optional in the markup;
/// the view is only built when the ring exists.
pub struct CursorView {
    window: web::Window,
    document: web::Document,
    ring: web::Element,
    dot: Option<web::Element>,
    state: CursorState,
    last: Option<CursorState>,
}

impl CursorView {
    pub fn new(window: &web::Window, document: &web::Document) -> Option<Self> {
        let ring = dom::by_id(document, CURSOR_ID)?;
        Some(Self {
            window: window.clone(),
            document: document.clone(),
            ring,
            dot: dom::by_id(document, CURSOR_DOT_ID),
            state: CursorState::default(),
            last: None,
        })
    }

    /// Tag name and computed background of the element under `p`.
    fn probe(&self, p: Vec2) -> Option<(String, String)> {
        let el = self.document.element_from_point(p.x, p.y)?;
        let style = self.window.get_computed_style(&el).ok().flatten()?;
        let bg = style.get_property_value("background-color").ok()?;
        Some((el.tag_name(), bg))
    }

    pub fn update(&mut self, s: &FrameSignals) {
        if !s.pointer_changed {
            return;
        }
        let Some(p) = s.pointer_client else {
            return;
        };
        let under = self.probe(p);
        self.state
            .update(p, under.as_ref().map(|(t, b)| (t.as_str(), b.as_str())));
        if self.last == Some(self.state) {
            return;
        }
        self.last = Some(self.state);

        let size = self.state.size();
        let left = format!("{}px", p.x - size * 0.5);
        let top = format!("{}px", p.y - size * 0.5);
        let dim = format!("{}px", size);
        dom::set_style(&self.ring, "left", &left);
        dom::set_style(&self.ring, "top", &top);
        dom::set_style(&self.ring, "width", &dim);
        dom::set_style(&self.ring, "height", &dim);
        dom::set_style(&self.ring, "border-color", self.state.color.css());
        dom::set_style(&self.ring, "box-shadow", &self.state.color.glow_css());
        if let Some(dot) = &self.dot {
            dom::set_style(dot, "left", &format!("{}px", p.x - 2.0));
            dom::set_style(dot, "top", &format!("{}px", p.y - 2.0));
            dom::set_style(dot, "background-color", self.state.color.css());
        }
    }
}

use folio_core::{Rect, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn element_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Bounding box of a still-attached element; `None` once it has left the
/// document so pointer maths becomes a no-op.
#[inline]
pub fn connected_rect(el: &web::Element) -> Option<Rect> {
    el.is_connected().then(|| element_rect(el))
}

pub fn viewport(window: &web::Window, document: &web::Document) -> Viewport {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    let document_height = document
        .document_element()
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);
    Viewport {
        width: dim(window.inner_width()),
        height: dim(window.inner_height()),
        document_height,
    }
}

#[inline]
pub fn scroll_offset(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

fn collect(list: Result<web::NodeList, wasm_bindgen::JsValue>) -> Vec<web::Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    collect(document.query_selector_all(selector))
}

#[inline]
pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    collect(root.query_selector_all(selector))
}

#[inline]
pub fn by_id(document: &web::Document, id: &str) -> Option<web::Element> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::debug!("[dom] no #{} on this page", id);
    }
    el
}

#[inline]
pub fn data_attr(el: &web::Element, name: &str) -> Option<String> {
    el.get_attribute(&format!("data-{}", name))
}

pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        if let Err(e) = html.style().set_property(property, value) {
            log::warn!("[dom] set {} failed: {:?}", property, e);
        }
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// Document-space top and height, as laid out (`offsetTop`/`offsetHeight`).
#[inline]
pub fn offset_box(el: &web::Element) -> Option<(f64, f64)> {
    el.dyn_ref::<web::HtmlElement>()
        .map(|h| (h.offset_top() as f64, h.offset_height() as f64))
}

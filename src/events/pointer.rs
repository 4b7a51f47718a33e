use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Client coordinates of a mouse or pointer event.
#[inline]
pub fn client_point(ev: &web::Event) -> Option<Vec2> {
    let m = ev.dyn_ref::<web::MouseEvent>()?;
    Some(Vec2::new(m.client_x() as f32, m.client_y() as f32))
}

/// The `name` and current value of the form control an input event came from.
pub fn input_name_value(ev: &web::Event) -> Option<(String, String)> {
    let target = ev.target()?;
    if let Some(input) = target.dyn_ref::<web::HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    if let Some(area) = target.dyn_ref::<web::HtmlTextAreaElement>() {
        return Some((area.name(), area.value()));
    }
    None
}

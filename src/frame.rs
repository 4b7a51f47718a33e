use folio_core::{FrameHandle, FrameScheduler};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` behind the sampler's scheduling trait.
///
/// The callback closure is created once and reused for every request; it
/// must outlive any frame it was handed to, which the sampler guarantees by
/// cancelling the in-flight frame on unmount.
pub struct RafScheduler {
    window: web::Window,
    callback: Closure<dyn FnMut()>,
}

impl RafScheduler {
    pub fn new(window: web::Window, callback: Closure<dyn FnMut()>) -> Self {
        Self { window, callback }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        match self
            .window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
        {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::debug!("[signals] requestAnimationFrame: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle);
    }
}

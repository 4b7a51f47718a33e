use crate::constants::*;
use crate::dom;
use fnv::FnvHashMap;
use folio_core::{RevealConfig, RevealId, RevealOutcome, RevealTracker, VisibilityEntry};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// How much of the target can fit inside the observer's root at once.
fn reachable_ratio(entry: &web::IntersectionObserverEntry) -> f64 {
    let target = entry.bounding_client_rect().height();
    let root = entry.root_bounds().map(|r| r.height()).unwrap_or(target);
    if target <= 0.0 {
        return 1.0;
    }
    (root / target).clamp(0.0, 1.0)
}

struct RevealState {
    tracker: RevealTracker,
    elements: FnvHashMap<RevealId, web::Element>,
}

/// `IntersectionObserver` driving the one-shot reveal of every
/// `.animate-slide-up` element on the page.
pub struct RevealBinding {
    observer: web::IntersectionObserver,
    state: Rc<RefCell<RevealState>>,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl RevealBinding {
    pub fn mount(document: &web::Document, cfg: &RevealConfig) -> anyhow::Result<Self> {
        let state = Rc::new(RefCell::new(RevealState {
            tracker: RevealTracker::new(cfg.threshold),
            elements: FnvHashMap::default(),
        }));

        let cb_state = state.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                let mut st = cb_state.borrow_mut();
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(id) = target
                        .get_attribute(REVEAL_ID_ATTR)
                        .and_then(|v| v.parse::<u32>().ok())
                        .map(RevealId)
                    else {
                        continue;
                    };
                    let outcome = st.tracker.observe(&VisibilityEntry {
                        id,
                        is_intersecting: entry.is_intersecting(),
                        visible_ratio: entry.intersection_ratio(),
                        reachable_ratio: reachable_ratio(&entry),
                    });
                    match outcome {
                        RevealOutcome::Revealed => {
                            dom::set_class(&target, REVEAL_HIDDEN_CLASS, false);
                            observer.unobserve(&target);
                            st.elements.remove(&id);
                            log::debug!("[reveal] {:?} revealed", id);
                        }
                        RevealOutcome::Ignored => observer.unobserve(&target),
                        RevealOutcome::StillPending => {}
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(cfg.threshold));
        init.set_root_margin(&cfg.root_margin);
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;

        {
            let mut st = state.borrow_mut();
            for el in dom::query_all(document, REVEAL_SELECTOR) {
                let id = st.tracker.register();
                _ = el.set_attribute(REVEAL_ID_ATTR, &id.0.to_string());
                observer.observe(&el);
                st.elements.insert(id, el);
            }
            log::info!(
                "[reveal] observing {} targets threshold={} margin={}",
                st.tracker.len(),
                cfg.threshold,
                cfg.root_margin
            );
        }

        Ok(Self {
            observer,
            state,
            _callback: callback,
        })
    }

    /// Stop observing every target still pending. Idempotent.
    pub fn teardown(&self) {
        let mut st = self.state.borrow_mut();
        let revealed = st.tracker.revealed_count();
        let pending = st.tracker.teardown();
        for id in &pending {
            if let Some(el) = st.elements.remove(id) {
                self.observer.unobserve(&el);
            }
        }
        self.observer.disconnect();
        if revealed + pending.len() > 0 {
            log::info!(
                "[reveal] teardown revealed={} pending={}",
                revealed,
                pending.len()
            );
        }
    }
}

impl Drop for RevealBinding {
    fn drop(&mut self) {
        self.teardown();
    }
}

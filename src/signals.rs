use crate::dom;
use crate::events::{client_point, EventListener};
use crate::frame::RafScheduler;
use folio_core::{FrameSampler, FrameSignals, ScrollState, SignalHub, Subscriber, SubscriberId};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use web_sys as web;

struct Inner {
    sampler: FrameSampler<RafScheduler>,
    hub: SignalHub,
}

impl Inner {
    fn on_frame(&mut self) {
        if let Some(batch) = self.sampler.on_frame() {
            log::trace!(
                "[signals] frame scroll={} pointer={}",
                batch.scroll.is_some(),
                batch.pointer.is_some()
            );
            self.hub.dispatch(&batch);
        }
    }
}

/// The page's single scroll/pointer sampler. Owns the window listeners and
/// fans each coalesced frame out to the subscribed views.
pub struct SignalService {
    inner: Rc<RefCell<Inner>>,
    listeners: Vec<EventListener>,
}

impl SignalService {
    pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Self> {
        let inner = Rc::new_cyclic(|weak: &Weak<RefCell<Inner>>| {
            let weak = weak.clone();
            let callback = Closure::wrap(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().on_frame();
                }
            }) as Box<dyn FnMut()>);
            RefCell::new(Inner {
                sampler: FrameSampler::new(RafScheduler::new(window.clone(), callback)),
                hub: SignalHub::new(),
            })
        });

        let viewport = dom::viewport(window, document);
        let offset = dom::scroll_offset(window);
        inner.borrow_mut().hub.prime(FrameSignals {
            scroll: ScrollState::sample(offset, &viewport),
            viewport,
            pointer_client: None,
            scroll_changed: true,
            pointer_changed: false,
        });

        let mut listeners = Vec::with_capacity(3);
        for event in ["scroll", "resize"] {
            let inner = inner.clone();
            let w = window.clone();
            let d = document.clone();
            listeners.push(EventListener::passive(window, event, move |_ev| {
                let offset = dom::scroll_offset(&w);
                let viewport = dom::viewport(&w, &d);
                match inner.try_borrow_mut() {
                    Ok(mut i) => i.sampler.record_scroll(offset, viewport),
                    Err(_) => log::debug!("[signals] {} during dispatch dropped", event),
                }
            })?);
        }
        {
            let inner = inner.clone();
            listeners.push(EventListener::passive(window, "pointermove", move |ev| {
                let Some(client) = client_point(&ev) else {
                    return;
                };
                match inner.try_borrow_mut() {
                    Ok(mut i) => i.sampler.record_pointer(client),
                    Err(_) => log::debug!("[signals] pointermove during dispatch dropped"),
                }
            })?);
        }

        log::info!(
            "[signals] mounted offset={:.0} viewport={:.0}x{:.0} document={:.0}",
            offset,
            viewport.width,
            viewport.height,
            viewport.document_height
        );
        Ok(Self { inner, listeners })
    }

    pub fn subscribe(&self, subscriber: Subscriber) -> SubscriberId {
        self.inner.borrow_mut().hub.subscribe(subscriber)
    }

    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        self.inner.borrow_mut().hub.unsubscribe(id)
    }

    /// Push the current state to every view without waiting for input.
    pub fn replay(&self) {
        self.inner.borrow_mut().hub.replay();
    }

    /// Remove listeners, cancel the pending frame and drop all views.
    /// Safe to call more than once.
    pub fn unmount(&mut self) {
        self.listeners.clear();
        let mut inner = self.inner.borrow_mut();
        if inner.sampler.is_mounted() {
            let stats = inner.sampler.stats();
            log::info!(
                "[signals] unmount events={} frames={} coalesced={}",
                stats.events,
                stats.frames,
                stats.coalesced
            );
        }
        inner.sampler.unmount();
        inner.hub.clear();
    }
}

impl Drop for SignalService {
    fn drop(&mut self) {
        self.unmount();
    }
}

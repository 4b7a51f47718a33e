#![cfg(target_arch = "wasm32")]
use folio_core::{FrameSignals, SubscriberId};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod constants;
mod contact;
mod cursor;
mod dom;
mod events;
mod frame;
mod nav;
mod parallax;
mod reveal;
mod signals;

use contact::ContactBinding;
use cursor::CursorView;
use events::EventListener;
use nav::NavView;
use reveal::RevealBinding;
use signals::SignalService;

/// Everything the page has mounted. Dropping it detaches all listeners,
/// cancels the pending frame and disconnects the observer.
struct App {
    signals: SignalService,
    subscriptions: Vec<SubscriberId>,
    reveal: RevealBinding,
    listeners: Vec<EventListener>,
    contact: Option<ContactBinding>,
}

impl App {
    fn mount() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let cfg = config::load(&document);

        let signals = SignalService::mount(&window, &document)?;
        let mut subscriptions = Vec::new();
        for mut view in parallax::discover(&document, &cfg) {
            subscriptions.push(signals.subscribe(Box::new(move |s: &FrameSignals| view.update(s))));
        }
        let mut nav = NavView::new(&document, cfg.nav);
        subscriptions.push(signals.subscribe(Box::new(move |s: &FrameSignals| nav.update(s))));
        if let Some(mut cursor) = CursorView::new(&window, &document) {
            subscriptions
                .push(signals.subscribe(Box::new(move |s: &FrameSignals| cursor.update(s))));
        }

        let reveal = RevealBinding::mount(&document, &cfg.reveal)?;
        let listeners = nav::bind_controls(&window, &document)?;
        let contact = ContactBinding::mount(&window, &document, cfg.contact)?;

        // Apply the initial scroll position before the first input event.
        signals.replay();
        log::info!("[app] mounted {} views", subscriptions.len());
        Ok(Self {
            signals,
            subscriptions,
            reveal,
            listeners,
            contact,
        })
    }

    fn unmount(mut self) {
        for id in self.subscriptions.drain(..) {
            self.signals.unsubscribe(id);
        }
        self.reveal.teardown();
        self.listeners.clear();
        if self.contact.as_ref().is_some_and(|c| c.is_submitting()) {
            log::info!("[app] unmounting with a submission in flight");
        }
        self.contact = None;
        self.signals.unmount();
        log::info!("[app] unmounted");
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    match App::mount() {
        Ok(app) => APP.with(|slot| *slot.borrow_mut() = Some(app)),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

/// Tear the page down. Calling it again is a no-op.
#[wasm_bindgen]
pub fn unmount() {
    if let Some(app) = APP.with(|slot| slot.borrow_mut().take()) {
        app.unmount();
    }
}

use crate::constants::*;
use crate::dom;
use crate::events::{input_name_value, EventListener};
use folio_core::{ContactConfig, ContactForm};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

struct Shared {
    form: ContactForm,
    element: web::HtmlFormElement,
    button: Option<web::HtmlButtonElement>,
}

impl Shared {
    fn set_busy(&self, busy: bool) {
        if let Some(btn) = &self.button {
            btn.set_disabled(busy);
            btn.set_text_content(Some(if busy {
                CONTACT_SENDING_LABEL
            } else {
                CONTACT_SUBMIT_LABEL
            }));
        }
    }
}

/// Resolves after `ms` milliseconds.
async fn sleep(window: &web::Window, ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });
    _ = JsFuture::from(promise).await;
}

/// Two-way binding for `#contact-form` with a simulated submit.
pub struct ContactBinding {
    shared: Rc<RefCell<Shared>>,
    _listeners: Vec<EventListener>,
}

impl ContactBinding {
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        cfg: ContactConfig,
    ) -> anyhow::Result<Option<Self>> {
        let Some(el) = dom::by_id(document, CONTACT_FORM_ID) else {
            return Ok(None);
        };
        let element = el
            .dyn_into::<web::HtmlFormElement>()
            .map_err(|_| anyhow::anyhow!("#{} is not a <form>", CONTACT_FORM_ID))?;
        let button = dom::by_id(document, CONTACT_SUBMIT_ID)
            .and_then(|b| b.dyn_into::<web::HtmlButtonElement>().ok());
        let shared = Rc::new(RefCell::new(Shared {
            form: ContactForm::new(),
            element: element.clone(),
            button,
        }));

        let mut listeners = Vec::with_capacity(2);
        {
            let shared = shared.clone();
            listeners.push(EventListener::new(element.unchecked_ref(), "input", move |ev| {
                if let Some((name, value)) = input_name_value(&ev) {
                    if !shared.borrow_mut().form.set_field(&name, &value) {
                        log::debug!("[contact] unbound field {:?}", name);
                    }
                }
            })?);
        }
        {
            let weak = Rc::downgrade(&shared);
            let window = window.clone();
            listeners.push(EventListener::new(element.unchecked_ref(), "submit", move |ev| {
                ev.prevent_default();
                let Some(shared) = weak.upgrade() else {
                    return;
                };
                {
                    let mut s = shared.borrow_mut();
                    if !s.form.begin_submit() {
                        log::debug!("[contact] submit already in progress");
                        return;
                    }
                    s.set_busy(true);
                }
                spawn_local(submit(window.clone(), Rc::downgrade(&shared), cfg));
            })?);
        }

        log::info!("[contact] bound, submit delay {}ms", cfg.submit_delay_ms);
        Ok(Some(Self {
            shared,
            _listeners: listeners,
        }))
    }

    pub fn is_submitting(&self) -> bool {
        self.shared.borrow().form.is_submitting()
    }
}

async fn submit(window: web::Window, shared: Weak<RefCell<Shared>>, cfg: ContactConfig) {
    sleep(&window, cfg.submit_delay_ms).await;
    // Unmounted while waiting.
    let Some(shared) = shared.upgrade() else {
        return;
    };
    let mut s = shared.borrow_mut();
    let sent = s.form.finish_submit();
    log::info!(
        "[contact] submitted name={:?} email={:?} subject={:?} message_len={}",
        sent.name,
        sent.email,
        sent.subject,
        sent.message.chars().count()
    );
    s.element.reset();
    s.set_busy(false);
}

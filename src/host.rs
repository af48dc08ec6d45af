//! Browser Host
//!
//! web-sys / gloo-timers implementations of the controller capabilities.
//! Elements are looked up by id on every call; a missing element is logged
//! and skipped.

use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use mailmock_core::{Dialogs, Host, Navigator, NotificationEvent, Notifier, Timer, ViewTree};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::store::{store_push_toast, store_remove_toast, ToastStore};

fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

// ========================
// DOM
// ========================

pub struct DomView;

impl DomView {
    fn element(&self, id: &str) -> Option<Element> {
        let found = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(id));
        if found.is_none() {
            log::debug!("[DOM] no element #{}", id);
        }
        found
    }

    fn html(&self, id: &str) -> Option<HtmlElement> {
        self.element(id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn input(&self, id: &str) -> Option<HtmlInputElement> {
        self.element(id).and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    }
}

impl ViewTree for DomView {
    fn value(&self, id: &str) -> String {
        let Some(el) = self.element(id) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            el.text_content().unwrap_or_default()
        }
    }

    fn set_value(&self, id: &str, value: &str) {
        let Some(el) = self.element(id) else {
            return;
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else {
            // contenteditable editors
            el.set_text_content(Some(value));
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.element(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_class(&self, id: &str, class: &str, on: bool) {
        if let Some(el) = self.element(id) {
            if let Err(e) = el.class_list().toggle_with_force(class, on) {
                log::warn!("[DOM] class {} on #{}: {:?}", class, id, e);
            }
        }
    }

    fn set_visible(&self, id: &str, visible: bool) {
        self.set_style(id, "display", if visible { "" } else { "none" });
    }

    fn set_disabled(&self, id: &str, disabled: bool) {
        if let Some(el) = self.element(id) {
            let _ = el.toggle_attribute_with_force("disabled", disabled);
        }
    }

    fn set_checked(&self, id: &str, checked: bool) {
        if let Some(input) = self.input(id) {
            input.set_checked(checked);
        }
    }

    fn set_indeterminate(&self, id: &str, indeterminate: bool) {
        if let Some(input) = self.input(id) {
            input.set_indeterminate(indeterminate);
        }
    }

    fn set_attribute(&self, id: &str, name: &str, value: &str) {
        if let Some(el) = self.element(id) {
            let _ = el.set_attribute(name, value);
        }
    }

    fn set_style(&self, id: &str, property: &str, value: &str) {
        if let Some(el) = self.html(id) {
            let style = el.style();
            let result = if value.is_empty() {
                style.remove_property(property).map(|_| ())
            } else {
                style.set_property(property, value)
            };
            if let Err(e) = result {
                log::warn!("[DOM] style {} on #{}: {:?}", property, id, e);
            }
        }
    }

    fn focus(&self, id: &str) {
        if let Some(el) = self.html(id) {
            let _ = el.focus();
        }
    }

    fn remove(&self, id: &str) {
        if let Some(el) = self.element(id) {
            el.remove();
        }
    }
}

// ========================
// Timer / Dialogs / Navigator
// ========================

pub struct GlooTimer;

#[async_trait(?Send)]
impl Timer for GlooTimer {
    async fn sleep(&self, delay: Duration) {
        TimeoutFuture::new(millis(delay)).await;
    }
}

pub struct BrowserDialogs;

#[async_trait(?Send)]
impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    async fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, target: &str) {
        log::info!("[NAV] -> {}", target);
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(target) {
                log::error!("[NAV] failed to open {}: {:?}", target, e);
            }
        }
    }
}

// ========================
// Toasts
// ========================

/// Pushes toasts into the [`ToastStore`] and drops them after their duration
pub struct ToastNotifier {
    store: ToastStore,
}

impl ToastNotifier {
    pub fn new(store: ToastStore) -> Self {
        Self { store }
    }
}

impl Notifier for ToastNotifier {
    fn show(&self, event: NotificationEvent) {
        let store = self.store;
        let id = store_push_toast(&store, &event);
        Timeout::new(millis(event.duration), move || store_remove_toast(&store, id)).forget();
    }
}

/// Host wired to the real page
pub fn browser_host(toasts: ToastStore) -> Host {
    Host::new(
        Rc::new(DomView),
        Rc::new(GlooTimer),
        Rc::new(BrowserDialogs),
        Rc::new(BrowserNavigator),
        Rc::new(ToastNotifier::new(toasts)),
    )
}

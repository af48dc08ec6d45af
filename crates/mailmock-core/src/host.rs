//! Host Capabilities
//!
//! Abstract interfaces the controllers are built on. The browser front-end
//! implements them over `web-sys`; tests use in-memory fakes.
//!
//! Everything runs on a single event-loop thread, so none of these are
//! `Send` and async methods are `?Send`.

use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;

use crate::notify::NotificationEvent;

/// Queryable, mutable presentation tree.
///
/// Elements are addressed by id. Operations on an id the host cannot find
/// are ignored by the host.
pub trait ViewTree {
    /// Current value of a form field (input, textarea, select)
    fn value(&self, id: &str) -> String;
    fn set_value(&self, id: &str, value: &str);
    fn set_text(&self, id: &str, text: &str);
    fn set_class(&self, id: &str, class: &str, on: bool);
    fn set_visible(&self, id: &str, visible: bool);
    fn set_disabled(&self, id: &str, disabled: bool);
    fn set_checked(&self, id: &str, checked: bool);
    fn set_indeterminate(&self, id: &str, indeterminate: bool);
    fn set_attribute(&self, id: &str, name: &str, value: &str);
    /// Inline style property, e.g. `animation` or `transform`
    fn set_style(&self, id: &str, property: &str, value: &str);
    fn focus(&self, id: &str);
    /// Detach the element from the tree permanently
    fn remove(&self, id: &str);
}

/// Delayed continuation. No exact timing guarantee; sleeps issued by one
/// controller complete in deadline order.
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, delay: Duration);
}

/// Blocking message and yes/no prompt.
#[async_trait(?Send)]
pub trait Dialogs {
    fn alert(&self, message: &str);
    async fn confirm(&self, message: &str) -> bool;
}

/// Full page transition.
pub trait Navigator {
    fn navigate(&self, target: &str);
}

/// Renders a toast and removes it after its duration.
pub trait Notifier {
    fn show(&self, event: NotificationEvent);
}

/// Bundle of host capabilities injected into a controller at construction.
#[derive(Clone)]
pub struct Host {
    pub view: Rc<dyn ViewTree>,
    pub timer: Rc<dyn Timer>,
    pub dialogs: Rc<dyn Dialogs>,
    pub navigator: Rc<dyn Navigator>,
    pub notifier: Rc<dyn Notifier>,
}

impl Host {
    pub fn new(
        view: Rc<dyn ViewTree>,
        timer: Rc<dyn Timer>,
        dialogs: Rc<dyn Dialogs>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            view,
            timer,
            dialogs,
            navigator,
            notifier,
        }
    }
}

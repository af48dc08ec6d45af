//! Test Fixtures
//!
//! In-memory host capabilities plus a single-threaded executor with a
//! virtual clock, so async controller operations can be stepped through
//! deterministically.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;

use crate::host::{Dialogs, Host, Navigator, Notifier, Timer, ViewTree};
use crate::notify::NotificationEvent;

// ========================
// View
// ========================

#[derive(Debug, Clone)]
pub struct FakeElement {
    pub value: String,
    pub text: String,
    pub classes: BTreeSet<String>,
    pub visible: bool,
    pub disabled: bool,
    pub checked: bool,
    pub indeterminate: bool,
    pub attributes: HashMap<String, String>,
    pub styles: HashMap<String, String>,
    pub removed: bool,
}

impl Default for FakeElement {
    fn default() -> Self {
        Self {
            value: String::new(),
            text: String::new(),
            classes: BTreeSet::new(),
            visible: true,
            disabled: false,
            checked: false,
            indeterminate: false,
            attributes: HashMap::new(),
            styles: HashMap::new(),
            removed: false,
        }
    }
}

/// Element tree keyed by id. Unknown ids spring into existence on write.
#[derive(Default)]
pub struct FakeView {
    elements: RefCell<HashMap<String, FakeElement>>,
    focused: RefCell<Option<String>>,
}

impl FakeView {
    fn with<R>(&self, id: &str, f: impl FnOnce(&mut FakeElement) -> R) -> R {
        let mut elements = self.elements.borrow_mut();
        f(elements.entry(id.to_string()).or_default())
    }

    fn read<R>(&self, id: &str, f: impl FnOnce(&FakeElement) -> R) -> R {
        let elements = self.elements.borrow();
        match elements.get(id) {
            Some(el) => f(el),
            None => f(&FakeElement::default()),
        }
    }

    /// Simulate the user typing into a field
    pub fn type_into(&self, id: &str, value: &str) {
        self.with(id, |el| el.value = value.to_string());
    }

    pub fn text(&self, id: &str) -> String {
        self.read(id, |el| el.text.clone())
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.read(id, |el| el.classes.contains(class))
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.read(id, |el| el.visible)
    }

    pub fn is_disabled(&self, id: &str) -> bool {
        self.read(id, |el| el.disabled)
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.read(id, |el| el.checked)
    }

    pub fn is_indeterminate(&self, id: &str) -> bool {
        self.read(id, |el| el.indeterminate)
    }

    pub fn is_removed(&self, id: &str) -> bool {
        self.read(id, |el| el.removed)
    }

    pub fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.read(id, |el| el.attributes.get(name).cloned())
    }

    pub fn style(&self, id: &str, property: &str) -> Option<String> {
        self.read(id, |el| el.styles.get(property).cloned())
    }

    pub fn focused(&self) -> Option<String> {
        self.focused.borrow().clone()
    }
}

impl ViewTree for FakeView {
    fn value(&self, id: &str) -> String {
        self.read(id, |el| el.value.clone())
    }

    fn set_value(&self, id: &str, value: &str) {
        self.with(id, |el| el.value = value.to_string());
    }

    fn set_text(&self, id: &str, text: &str) {
        self.with(id, |el| el.text = text.to_string());
    }

    fn set_class(&self, id: &str, class: &str, on: bool) {
        self.with(id, |el| {
            if on {
                el.classes.insert(class.to_string());
            } else {
                el.classes.remove(class);
            }
        });
    }

    fn set_visible(&self, id: &str, visible: bool) {
        self.with(id, |el| el.visible = visible);
    }

    fn set_disabled(&self, id: &str, disabled: bool) {
        self.with(id, |el| el.disabled = disabled);
    }

    fn set_checked(&self, id: &str, checked: bool) {
        self.with(id, |el| el.checked = checked);
    }

    fn set_indeterminate(&self, id: &str, indeterminate: bool) {
        self.with(id, |el| el.indeterminate = indeterminate);
    }

    fn set_attribute(&self, id: &str, name: &str, value: &str) {
        self.with(id, |el| {
            el.attributes.insert(name.to_string(), value.to_string());
        });
    }

    fn set_style(&self, id: &str, property: &str, value: &str) {
        self.with(id, |el| {
            el.styles.insert(property.to_string(), value.to_string());
        });
    }

    fn focus(&self, id: &str) {
        *self.focused.borrow_mut() = Some(id.to_string());
    }

    fn remove(&self, id: &str) {
        self.with(id, |el| el.removed = true);
    }
}

// ========================
// Timer (virtual clock)
// ========================

#[derive(Default)]
pub struct ManualTimer {
    now: Cell<Duration>,
    pending: RefCell<Vec<(Duration, oneshot::Sender<()>)>>,
}

impl ManualTimer {
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    fn next_deadline(&self) -> Option<Duration> {
        self.pending.borrow().iter().map(|(deadline, _)| *deadline).min()
    }

    /// Move the clock to `at` and wake every sleep due by then
    fn fire_until(&self, at: Duration) {
        self.now.set(at);
        let due: Vec<_> = {
            let mut pending = self.pending.borrow_mut();
            let (due, rest): (Vec<_>, Vec<_>) = pending.drain(..).partition(|(deadline, _)| *deadline <= at);
            *pending = rest;
            due
        };
        for (_, tx) in due {
            let _ = tx.send(());
        }
    }
}

#[async_trait(?Send)]
impl Timer for ManualTimer {
    async fn sleep(&self, delay: Duration) {
        if delay.is_zero() {
            return;
        }
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push((self.now.get() + delay, tx));
        let _ = rx.await;
    }
}

// ========================
// Dialogs / Navigator / Notifier
// ========================

pub struct FakeDialogs {
    pub answer: Cell<bool>,
    pub alerts: RefCell<Vec<String>>,
    pub prompts: RefCell<Vec<String>>,
}

impl Default for FakeDialogs {
    fn default() -> Self {
        Self {
            answer: Cell::new(true),
            alerts: RefCell::default(),
            prompts: RefCell::default(),
        }
    }
}

#[async_trait(?Send)]
impl Dialogs for FakeDialogs {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    async fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.answer.get()
    }
}

#[derive(Default)]
pub struct FakeNavigator {
    pub visits: RefCell<Vec<String>>,
}

impl Navigator for FakeNavigator {
    fn navigate(&self, target: &str) {
        self.visits.borrow_mut().push(target.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub events: RefCell<Vec<NotificationEvent>>,
}

impl Notifier for RecordingNotifier {
    fn show(&self, event: NotificationEvent) {
        self.events.borrow_mut().push(event);
    }
}

// ========================
// Fixture
// ========================

pub struct Fixture {
    pub view: Rc<FakeView>,
    pub timer: Rc<ManualTimer>,
    pub dialogs: Rc<FakeDialogs>,
    pub navigator: Rc<FakeNavigator>,
    pub notifier: Rc<RecordingNotifier>,
    pool: LocalPool,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            view: Rc::new(FakeView::default()),
            timer: Rc::new(ManualTimer::default()),
            dialogs: Rc::new(FakeDialogs::default()),
            navigator: Rc::new(FakeNavigator::default()),
            notifier: Rc::new(RecordingNotifier::default()),
            pool: LocalPool::new(),
        }
    }

    pub fn host(&self) -> Host {
        Host::new(
            self.view.clone(),
            self.timer.clone(),
            self.dialogs.clone(),
            self.navigator.clone(),
            self.notifier.clone(),
        )
    }

    /// Spawn `fut` and run it until it completes or waits on the clock.
    /// The returned slot is filled once it completes.
    pub fn spawn<T: 'static>(&mut self, fut: impl Future<Output = T> + 'static) -> Rc<RefCell<Option<T>>> {
        let slot = Rc::new(RefCell::new(None));
        let out = slot.clone();
        self.pool
            .spawner()
            .spawn_local(async move {
                let value = fut.await;
                *out.borrow_mut() = Some(value);
            })
            .expect("spawn on local pool");
        self.pool.run_until_stalled();
        slot
    }

    /// Advance the virtual clock, waking sleeps in deadline order
    pub fn advance(&mut self, millis: u64) {
        let target = self.timer.now() + Duration::from_millis(millis);
        self.pool.run_until_stalled();
        while let Some(deadline) = self.timer.next_deadline().filter(|d| *d <= target) {
            self.timer.fire_until(deadline);
            self.pool.run_until_stalled();
        }
        self.timer.fire_until(target);
        self.pool.run_until_stalled();
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifier.events.borrow().iter().map(|e| e.message.clone()).collect()
    }
}

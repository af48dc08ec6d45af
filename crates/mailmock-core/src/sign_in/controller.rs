//! Sign-In Flow Controller
//!
//! Owns the [`SignInSession`] and applies it to the page through the
//! injected [`Host`]. Cloning the controller clones a handle; all clones
//! share one session.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info, warn};

use crate::config::SignInConfig;
use crate::error::{ActionResult, PreconditionNotMet, ValidationError};
use crate::host::Host;
use crate::keys::KeyInput;
use crate::notify::{NotificationEvent, Severity};

use super::ids;
use super::session::{Field, SignInSession, Step};
use super::validate::{avatar_glyph, validate_identifier, validate_password_len};

const SLIDE_OUT: &str = "slideOut 0.3s ease-in forwards";
const SLIDE_IN: &str = "slideIn 0.3s ease-out forwards";

/// Informational links on the sign-in cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInLink {
    CreateAccount,
    ForgotEmail,
    ForgotPassword,
    LearnMore,
}

impl SignInLink {
    pub fn message(self) -> &'static str {
        match self {
            SignInLink::CreateAccount => "Create Account feature would redirect to account creation page.",
            SignInLink::ForgotEmail => "Account recovery would help you find your email.",
            SignInLink::ForgotPassword => "Password recovery would be initiated.",
            SignInLink::LearnMore => "Guest mode information would be displayed.",
        }
    }
}

/// Keyboard shortcuts of the sign-in page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInShortcut {
    SubmitIdentifier,
    SubmitPassword,
    Back,
    FocusField,
}

impl SignInShortcut {
    /// Whether the browser's default handling of the key must be suppressed
    pub fn prevents_default(self) -> bool {
        !matches!(self, SignInShortcut::Back)
    }
}

fn resolve_shortcut(step: Step, key: &KeyInput) -> Option<SignInShortcut> {
    match key.key.as_str() {
        "Enter" if !key.shift => match step {
            Step::Email if key.target_is(ids::EMAIL_INPUT) => Some(SignInShortcut::SubmitIdentifier),
            Step::Password if key.target_is(ids::PASSWORD_INPUT) => Some(SignInShortcut::SubmitPassword),
            _ => None,
        },
        "Escape" if step == Step::Password => Some(SignInShortcut::Back),
        "k" | "K" if key.command() => Some(SignInShortcut::FocusField),
        _ => None,
    }
}

#[derive(Clone)]
pub struct SignInFlow {
    host: Host,
    config: Rc<SignInConfig>,
    session: Rc<RefCell<SignInSession>>,
    alive: Rc<Cell<bool>>,
}

impl SignInFlow {
    pub fn new(host: Host, config: SignInConfig) -> Self {
        Self {
            host,
            config: Rc::new(config),
            session: Rc::new(RefCell::new(SignInSession::default())),
            alive: Rc::new(Cell::new(true)),
        }
    }

    /// Render the initial state onto a freshly created page
    pub fn mount(&self) {
        let view = &self.host.view;
        view.set_visible(ids::EMAIL_STEP, true);
        view.set_visible(ids::PASSWORD_STEP, false);
        view.set_class(ids::LOADING_OVERLAY, "show", false);
        for field in [Field::Identifier, Field::Password] {
            self.render_error(field, None);
            view.set_attribute(field.input_id(), "aria-describedby", field.error_id());
        }
        view.set_attribute(ids::PASSWORD_INPUT, "type", "password");
        view.set_attribute(ids::SHOW_PASSWORD, "aria-label", "Show password");
        view.set_attribute(ids::ANNOUNCER, "aria-live", "polite");
        view.set_attribute(ids::ANNOUNCER, "aria-atomic", "true");
        self.sync_filled_fields();
        debug!("sign-in flow mounted");
    }

    /// Stop all pending delayed work. Pending operations resolve with
    /// [`PreconditionNotMet::TornDown`] and touch nothing further.
    pub fn teardown(&self) {
        self.alive.set(false);
    }

    pub fn session(&self) -> SignInSession {
        self.session.borrow().clone()
    }

    pub fn step(&self) -> Step {
        self.session.borrow().step
    }

    fn is_alive(&self) -> bool {
        self.alive.get()
    }

    fn ensure_ready(&self, step: Step) -> Result<(), PreconditionNotMet> {
        if !self.is_alive() {
            return Err(PreconditionNotMet::TornDown);
        }
        let session = self.session.borrow();
        if session.busy {
            return Err(PreconditionNotMet::Busy);
        }
        if session.step != step {
            return Err(PreconditionNotMet::WrongStep);
        }
        Ok(())
    }

    // ========================
    // Field handling
    // ========================

    /// Validate `field`'s current value and show or clear its inline error.
    /// Returns the value on success.
    fn check(&self, field: Field) -> Result<String, ValidationError> {
        let value = self.host.view.value(field.input_id());
        let result = match field {
            Field::Identifier => validate_identifier(&value),
            Field::Password => validate_password_len(&value, self.config.min_password_len),
        };
        self.session.borrow_mut().set_error(field, result.err());
        self.render_error(field, result.err());
        result.map(|()| value)
    }

    fn render_error(&self, field: Field, error: Option<ValidationError>) {
        let view = &self.host.view;
        let message = error.map(|e| e.to_string()).unwrap_or_default();
        view.set_text(field.error_id(), &message);
        view.set_visible(field.error_id(), error.is_some());
        view.set_class(field.wrapper_id(), "error", error.is_some());
    }

    fn refresh_has_value(&self, field: Field) -> bool {
        let filled = !self.host.view.value(field.input_id()).is_empty();
        self.host.view.set_class(field.input_id(), "has-value", filled);
        filled
    }

    /// Input event: float the label and re-validate live
    pub fn on_field_input(&self, field: Field) {
        self.refresh_has_value(field);
        let _ = self.check(field);
    }

    pub fn on_field_focus(&self, field: Field) {
        self.host.view.set_class(field.wrapper_id(), "focused", true);
    }

    /// Blur event: only non-empty fields are validated
    pub fn on_field_blur(&self, field: Field) {
        self.host.view.set_class(field.wrapper_id(), "focused", false);
        if self.refresh_has_value(field) {
            let _ = self.check(field);
        }
    }

    /// Float labels of fields the browser filled in on its own
    pub fn sync_filled_fields(&self) {
        self.refresh_has_value(Field::Identifier);
        self.refresh_has_value(Field::Password);
    }

    // ========================
    // Transitions
    // ========================

    fn set_busy(&self, busy: bool) {
        let step = {
            let mut session = self.session.borrow_mut();
            session.busy = busy;
            session.step
        };
        let view = &self.host.view;
        view.set_class(ids::LOADING_OVERLAY, "show", busy);
        if busy {
            for id in step.controls() {
                view.set_disabled(id, true);
            }
        } else {
            for id in Step::Email.controls().iter().chain(Step::Password.controls()) {
                view.set_disabled(id, false);
            }
        }
    }

    /// Change step immediately; returns the epoch of this transition
    fn enter_step(&self, step: Step) -> u64 {
        let mut session = self.session.borrow_mut();
        session.step = step;
        session.transition_epoch += 1;
        debug!("sign-in step -> {:?}", step);
        session.transition_epoch
    }

    /// Slide the outgoing card away and the incoming one in. Skipped if a
    /// newer transition started meanwhile.
    async fn swap_cards(&self, from: Step, to: Step, epoch: u64) {
        let view = &self.host.view;
        view.set_style(from.card_id(), "animation", SLIDE_OUT);
        self.host.timer.sleep(self.config.step_transition()).await;
        if !self.is_alive() || self.session.borrow().transition_epoch != epoch {
            return;
        }
        view.set_visible(from.card_id(), false);
        view.set_visible(to.card_id(), true);
        view.set_style(to.card_id(), "animation", SLIDE_IN);
        view.focus(to.field().input_id());
    }

    fn announce(&self, message: &str) {
        self.host.view.set_text(ids::ANNOUNCER, message);
    }

    /// Validate the identifier, simulate the account lookup, then move to the
    /// password step.
    pub async fn submit_identifier(&self) -> ActionResult {
        self.ensure_ready(Step::Email)?;
        let value = match self.check(Field::Identifier) {
            Ok(value) => value,
            Err(err) => {
                self.host.view.focus(ids::EMAIL_INPUT);
                return Err(err.into());
            }
        };

        self.set_busy(true);
        self.host.timer.sleep(self.config.identifier_delay()).await;
        if !self.is_alive() {
            return Err(PreconditionNotMet::TornDown.into());
        }
        self.set_busy(false);

        let identifier = value.trim().to_string();
        let view = &self.host.view;
        view.set_text(ids::USER_EMAIL, &identifier);
        view.set_text(ids::USER_INITIAL, &avatar_glyph(&identifier));
        self.session.borrow_mut().identifier = identifier;
        let epoch = self.enter_step(Step::Password);
        self.announce("Enter your password");

        self.swap_cards(Step::Email, Step::Password, epoch).await;
        Ok(())
    }

    /// Validate the password, simulate authentication, announce success and
    /// hand off to the navigator. The flow stays busy from the first wait
    /// until the redirect; only the loading overlay goes away before the
    /// success toast.
    pub async fn submit_password(&self) -> ActionResult {
        self.ensure_ready(Step::Password)?;
        if let Err(err) = self.check(Field::Password) {
            self.host.view.focus(ids::PASSWORD_INPUT);
            return Err(err.into());
        }

        self.set_busy(true);
        self.host.timer.sleep(self.config.password_delay()).await;
        if !self.is_alive() {
            return Err(PreconditionNotMet::TornDown.into());
        }
        self.host.view.set_class(ids::LOADING_OVERLAY, "show", false);
        self.notify("Sign in successful! Redirecting to your inbox...", Severity::Success);

        self.host.timer.sleep(self.config.redirect_delay()).await;
        if !self.is_alive() {
            return Err(PreconditionNotMet::TornDown.into());
        }
        info!("signed in as {}, redirecting to {}", self.session.borrow().identifier, self.config.redirect_target);
        self.host.navigator.navigate(&self.config.redirect_target);
        Ok(())
    }

    /// Return to the email step, dropping whatever was typed as password
    pub async fn go_back(&self) -> ActionResult {
        self.ensure_ready(Step::Password)?;
        let epoch = self.enter_step(Step::Email);
        self.session.borrow_mut().password_error = None;

        let view = &self.host.view;
        view.set_value(ids::PASSWORD_INPUT, "");
        view.set_class(ids::PASSWORD_INPUT, "has-value", false);
        self.render_error(Field::Password, None);
        self.announce("Enter your email or phone number");

        self.swap_cards(Step::Password, Step::Email, epoch).await;
        Ok(())
    }

    /// Show or mask the password. Returns whether it is now shown.
    pub fn toggle_secret_visibility(&self) -> bool {
        let visible = {
            let mut session = self.session.borrow_mut();
            session.secret_visible = !session.secret_visible;
            session.secret_visible
        };
        let view = &self.host.view;
        view.set_attribute(ids::PASSWORD_INPUT, "type", if visible { "text" } else { "password" });
        view.set_class(ids::SHOW_PASSWORD, "revealed", visible);
        view.set_attribute(ids::SHOW_PASSWORD, "aria-label", if visible { "Hide password" } else { "Show password" });
        visible
    }

    // ========================
    // Cosmetic extras
    // ========================

    /// One of the language selectors changed: mirror it on the other one
    pub fn change_language(&self, source_id: &str, value: &str, label: &str) {
        for id in [ids::LANGUAGE_SELECT, ids::LANGUAGE_FOOTER] {
            if id != source_id {
                self.host.view.set_value(id, value);
            }
        }
        self.notify(&format!("Language changed to: {}", label), Severity::Info);
    }

    pub fn follow_link(&self, link: SignInLink) {
        self.notify(link.message(), Severity::Info);
    }

    pub fn shortcut_for(&self, key: &KeyInput) -> Option<SignInShortcut> {
        resolve_shortcut(self.step(), key)
    }

    pub async fn run_shortcut(&self, shortcut: SignInShortcut) -> ActionResult {
        match shortcut {
            SignInShortcut::SubmitIdentifier => self.submit_identifier().await,
            SignInShortcut::SubmitPassword => self.submit_password().await,
            SignInShortcut::Back => self.go_back().await,
            SignInShortcut::FocusField => {
                self.host.view.focus(self.step().field().input_id());
                Ok(())
            }
        }
    }

    fn notify(&self, message: &str, severity: Severity) {
        if !self.is_alive() {
            warn!("dropping notification after teardown: {}", message);
            return;
        }
        self.host
            .notifier
            .show(NotificationEvent::new(message, severity, self.config.notice_duration()));
    }
}

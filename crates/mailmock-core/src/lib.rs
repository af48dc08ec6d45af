//! Mailmock Core
//!
//! Controllers behind the two mailmock pages:
//! - sign_in: two-step email/password state machine
//! - inbox: selection, flags, compose modal and shortcuts over listed emails
//!
//! Both controllers only talk to the outside world through the capabilities
//! in [`host`], so everything here runs (and is tested) without a browser.

pub mod config;
pub mod error;
pub mod host;
pub mod inbox;
pub mod keys;
pub mod notify;
pub mod sign_in;

#[cfg(test)]
mod testing;

pub use config::{InboxConfig, MockConfig, SignInConfig};
pub use error::{ActionError, ActionResult, PreconditionNotMet, ValidationError};
pub use host::{Dialogs, Host, Navigator, Notifier, Timer, ViewTree};
pub use notify::{NotificationEvent, Severity};

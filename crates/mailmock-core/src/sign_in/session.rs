//! Sign-In Session State

use crate::error::ValidationError;

use super::ids;

/// Which card of the flow is current
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Email,
    Password,
}

/// The two text fields of the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Identifier,
    Password,
}

impl Field {
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Identifier => ids::EMAIL_INPUT,
            Field::Password => ids::PASSWORD_INPUT,
        }
    }

    pub fn wrapper_id(self) -> &'static str {
        match self {
            Field::Identifier => ids::EMAIL_WRAPPER,
            Field::Password => ids::PASSWORD_WRAPPER,
        }
    }

    pub fn error_id(self) -> &'static str {
        match self {
            Field::Identifier => ids::EMAIL_ERROR,
            Field::Password => ids::PASSWORD_ERROR,
        }
    }
}

impl Step {
    pub fn card_id(self) -> &'static str {
        match self {
            Step::Email => ids::EMAIL_STEP,
            Step::Password => ids::PASSWORD_STEP,
        }
    }

    /// The field that receives focus on this step
    pub fn field(self) -> Field {
        match self {
            Step::Email => Field::Identifier,
            Step::Password => Field::Password,
        }
    }

    /// Controls disabled while this step's form is submitting
    pub fn controls(self) -> &'static [&'static str] {
        match self {
            Step::Email => &[ids::EMAIL_INPUT, ids::NEXT_BUTTON],
            Step::Password => &[
                ids::PASSWORD_INPUT,
                ids::SHOW_PASSWORD,
                ids::BACK_BUTTON,
                ids::SIGN_IN_BUTTON,
                ids::SWITCH_ACCOUNT,
            ],
        }
    }
}

/// Transient state of one sign-in attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInSession {
    pub step: Step,
    /// Identifier accepted by the email step (trimmed)
    pub identifier: String,
    pub identifier_error: Option<ValidationError>,
    pub password_error: Option<ValidationError>,
    /// A simulated request is in flight
    pub busy: bool,
    /// Password shown as plain text
    pub secret_visible: bool,
    /// Bumped on every step change; a pending card swap only applies if
    /// the epoch it started with is still current
    pub(crate) transition_epoch: u64,
}

impl SignInSession {
    pub fn error(&self, field: Field) -> Option<ValidationError> {
        match field {
            Field::Identifier => self.identifier_error,
            Field::Password => self.password_error,
        }
    }

    pub(crate) fn set_error(&mut self, field: Field, error: Option<ValidationError>) {
        match field {
            Field::Identifier => self.identifier_error = error,
            Field::Password => self.password_error = error,
        }
    }
}

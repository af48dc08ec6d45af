//! Controller Errors
//!
//! Nothing here is fatal: a failed action leaves its controller untouched.

use thiserror::Error;

/// Per-field validation failure. `Display` is the inline message shown
/// under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter an email or phone number")]
    MissingIdentifier,
    #[error("Enter a valid email or phone number")]
    InvalidIdentifier,
    #[error("Enter your password")]
    MissingPassword,
    #[error("Password is too short")]
    PasswordTooShort,
}

/// An action was refused because its precondition does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PreconditionNotMet {
    #[error("a submission is already in progress")]
    Busy,
    #[error("action is not available on the current step")]
    WrongStep,
    #[error("no messages are selected")]
    EmptySelection,
    #[error("deletion was not confirmed")]
    Declined,
    #[error("Please enter a recipient email address.")]
    MissingRecipient,
    #[error("compose window is not open")]
    ComposeClosed,
    #[error("controller has been torn down")]
    TornDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Precondition(#[from] PreconditionNotMet),
}

pub type ActionResult<T = ()> = Result<T, ActionError>;

//! Sign-In Flow
//!
//! Email step → password step, with simulated network delays.

mod controller;
mod session;
mod validate;

pub use controller::{SignInFlow, SignInLink, SignInShortcut};
pub use session::{Field, SignInSession, Step};
pub use validate::{avatar_glyph, validate_identifier, validate_password, validate_password_len, MIN_PASSWORD_LEN};

/// Element ids the sign-in page must render
pub mod ids {
    pub const EMAIL_STEP: &str = "emailStep";
    pub const PASSWORD_STEP: &str = "passwordStep";
    pub const EMAIL_INPUT: &str = "email";
    pub const PASSWORD_INPUT: &str = "password";
    pub const EMAIL_WRAPPER: &str = "emailWrapper";
    pub const PASSWORD_WRAPPER: &str = "passwordWrapper";
    pub const EMAIL_ERROR: &str = "emailError";
    pub const PASSWORD_ERROR: &str = "passwordError";
    pub const NEXT_BUTTON: &str = "nextButton";
    pub const BACK_BUTTON: &str = "backButton";
    pub const SIGN_IN_BUTTON: &str = "signInButton";
    pub const SHOW_PASSWORD: &str = "showPassword";
    pub const SWITCH_ACCOUNT: &str = "switchAccount";
    pub const LOADING_OVERLAY: &str = "loadingOverlay";
    pub const USER_EMAIL: &str = "userEmailDisplay";
    pub const USER_INITIAL: &str = "userInitial";
    pub const LANGUAGE_SELECT: &str = "languageSelect";
    pub const LANGUAGE_FOOTER: &str = "languageFooter";
    pub const ANNOUNCER: &str = "srAnnouncer";
}

//! Timing and behaviour settings
//!
//! Every field falls back to its default when missing from the source JSON,
//! so a partial config object is valid.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Sign-in page settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignInConfig {
    /// Simulated lookup after a valid identifier
    pub identifier_delay_ms: u32,
    /// Simulated authentication after a valid password
    pub password_delay_ms: u32,
    /// Pause between the success toast and the redirect
    pub redirect_delay_ms: u32,
    /// Card slide animation length
    pub step_transition_ms: u32,
    pub notice_duration_ms: u32,
    pub redirect_target: String,
    pub min_password_len: usize,
}

impl Default for SignInConfig {
    fn default() -> Self {
        Self {
            identifier_delay_ms: 1500,
            password_delay_ms: 2000,
            redirect_delay_ms: 2000,
            step_transition_ms: 300,
            notice_duration_ms: 4000,
            redirect_target: "index.html".to_string(),
            min_password_len: 6,
        }
    }
}

impl SignInConfig {
    /// All delays set to zero, for tests and reduced-motion hosts
    pub fn instant() -> Self {
        Self {
            identifier_delay_ms: 0,
            password_delay_ms: 0,
            redirect_delay_ms: 0,
            step_transition_ms: 0,
            ..Self::default()
        }
    }

    pub fn identifier_delay(&self) -> Duration {
        ms(self.identifier_delay_ms)
    }

    pub fn password_delay(&self) -> Duration {
        ms(self.password_delay_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        ms(self.redirect_delay_ms)
    }

    pub fn step_transition(&self) -> Duration {
        ms(self.step_transition_ms)
    }

    pub fn notice_duration(&self) -> Duration {
        ms(self.notice_duration_ms)
    }
}

/// Inbox page settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InboxConfig {
    pub notice_duration_ms: u32,
    /// How long the refresh button stays rotated
    pub refresh_spin_ms: u32,
    /// Window widths at or below this get the mobile sidebar
    pub mobile_breakpoint_px: u32,
}

impl Default for InboxConfig {
    fn default() -> Self {
        Self {
            notice_duration_ms: 3000,
            refresh_spin_ms: 500,
            mobile_breakpoint_px: 768,
        }
    }
}

impl InboxConfig {
    pub fn notice_duration(&self) -> Duration {
        ms(self.notice_duration_ms)
    }

    pub fn refresh_spin(&self) -> Duration {
        ms(self.refresh_spin_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    pub sign_in: SignInConfig,
    pub inbox: InboxConfig,
}

fn ms(value: u32) -> Duration {
    Duration::from_millis(u64::from(value))
}

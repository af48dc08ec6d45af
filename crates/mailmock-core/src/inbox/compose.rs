//! Compose Draft

use super::ids;

/// Fields of the compose modal while it is open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Recipient,
    Subject,
    Body,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [DraftField::Recipient, DraftField::Subject, DraftField::Body];

    pub fn input_id(self) -> &'static str {
        match self {
            DraftField::Recipient => ids::COMPOSE_TO,
            DraftField::Subject => ids::COMPOSE_SUBJECT,
            DraftField::Body => ids::COMPOSE_BODY,
        }
    }
}

impl ComposeDraft {
    pub fn set(&mut self, field: DraftField, value: &str) {
        let slot = match field {
            DraftField::Recipient => &mut self.recipient,
            DraftField::Subject => &mut self.subject,
            DraftField::Body => &mut self.body,
        };
        *slot = value.to_string();
    }
}

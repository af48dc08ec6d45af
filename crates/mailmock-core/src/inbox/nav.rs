//! Sidebar folders and side-panel apps

/// Folder entries of the left sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Folder {
    #[default]
    Inbox,
    Starred,
    Snoozed,
    Sent,
    Drafts,
    More,
}

impl Folder {
    pub const ALL: [Folder; 6] = [
        Folder::Inbox,
        Folder::Starred,
        Folder::Snoozed,
        Folder::Sent,
        Folder::Drafts,
        Folder::More,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Folder::Inbox => "Inbox",
            Folder::Starred => "Starred",
            Folder::Snoozed => "Snoozed",
            Folder::Sent => "Sent",
            Folder::Drafts => "Drafts",
            Folder::More => "More",
        }
    }

    /// Material icon name
    pub fn icon(self) -> &'static str {
        match self {
            Folder::Inbox => "inbox",
            Folder::Starred => "star",
            Folder::Snoozed => "schedule",
            Folder::Sent => "send",
            Folder::Drafts => "drafts",
            Folder::More => "expand_more",
        }
    }

    pub fn element_id(self) -> String {
        format!("nav-{}", self.label().to_lowercase())
    }
}

/// Icons of the right-hand app panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Calendar,
    Tasks,
    Contacts,
    AddOns,
}

impl Panel {
    pub const ALL: [Panel; 4] = [Panel::Calendar, Panel::Tasks, Panel::Contacts, Panel::AddOns];

    pub fn icon(self) -> &'static str {
        match self {
            Panel::Calendar => "schedule",
            Panel::Tasks => "assignment",
            Panel::Contacts => "contacts",
            Panel::AddOns => "add",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Panel::Calendar => "Calendar opened",
            Panel::Tasks => "Tasks opened",
            Panel::Contacts => "Contacts opened",
            Panel::AddOns => "Add-ons panel opened",
        }
    }

    pub fn element_id(self) -> String {
        format!("panel-{}", self.icon())
    }
}

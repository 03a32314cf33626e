//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Post and comment collections are NOT here: each view owns its own.

use reactive_stores::Store;

use crate::models::Post;
use crate::session::Session;

#[derive(Clone, Debug, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Error => "notice notice-error",
            NoticeKind::Info => "notice notice-info",
        }
    }
}

/// Transient message shown in the banner
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// Lets a timer clear only the notice it was started for
    pub seq: u32,
}

/// App-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Logged-in user, if any
    pub session: Option<Session>,
    /// Banner currently shown
    pub notice: Option<Notice>,
    /// Last notice sequence number handed out
    pub notice_seq: u32,
    /// Post passed from a list to the detail view so it need not be refetched
    pub handoff: Option<Post>,
}

impl AppState {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            session,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

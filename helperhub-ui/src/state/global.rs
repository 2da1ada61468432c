//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use std::collections::HashSet;

use helperhub::models::{HelperProfile, ProfileId};

/// Kind of toast; sets its colour and how long it stays up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Saved, sent, signed in or out
    Confirmation,
    /// A request the visitor made did not go through
    Failure,
}

impl NoticeKind {
    fn duration_ms(&self) -> u32 {
        match self {
            NoticeKind::Confirmation => 3000,
            NoticeKind::Failure => 5000,
        }
    }
}

/// The toast currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Increases with every notice so a stale timer leaves a newer one alone
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Catalogue as last loaded from the API
    pub profiles: RwSignal<Vec<HelperProfile>>,
    /// Favorite ids as the server last reported them
    pub favorites: RwSignal<HashSet<ProfileId>>,
    /// Profile shown in the detail popup
    pub selected: RwSignal<Option<HelperProfile>>,
    /// Login prompt modal visibility
    pub login_prompt: RwSignal<bool>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Toast on screen, at most one at a time
    pub notice: RwSignal<Option<Notice>>,
    next_notice: StoredValue<u32>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        profiles: create_rw_signal(Vec::new()),
        favorites: create_rw_signal(HashSet::new()),
        selected: create_rw_signal(None),
        login_prompt: create_rw_signal(false),
        loading: create_rw_signal(false),
        notice: create_rw_signal(None),
        next_notice: store_value(0),
    };

    provide_context(state);
}

impl GlobalState {
    pub fn show_success(&self, message: &str) {
        self.notify(NoticeKind::Confirmation, message);
    }

    pub fn show_error(&self, message: &str) {
        self.notify(NoticeKind::Failure, message);
    }

    /// Replace the current toast; it clears itself after its kind's duration
    pub fn notify(&self, kind: NoticeKind, message: &str) {
        let id = self.next_notice.get_value().wrapping_add(1);
        self.next_notice.set_value(id);
        self.notice.set(Some(Notice {
            id,
            kind,
            message: message.to_string(),
        }));

        let state = *self;
        gloo_timers::callback::Timeout::new(kind.duration_ms(), move || state.dismiss(id)).forget();
    }

    /// Clear the toast if it is still the one with this id
    pub fn dismiss(&self, id: u32) {
        if self.notice.with_untracked(|n| n.as_ref().map(|n| n.id) == Some(id)) {
            self.notice.set(None);
        }
    }

    pub fn prompt_login(&self) {
        self.login_prompt.set(true);
    }

    pub fn open_detail(&self, profile: HelperProfile) {
        self.selected.set(Some(profile));
    }

    pub fn close_detail(&self) {
        self.selected.set(None);
    }

    /// Record a confirmed favorite change so other cards stay in sync
    pub fn set_favorite(&self, id: &str, favorited: bool) {
        self.favorites.update(|favorites| {
            if favorited {
                favorites.insert(id.to_string());
            } else {
                favorites.remove(id);
            }
        });
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.with(|favorites| favorites.contains(id))
    }
}


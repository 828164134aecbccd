mod dialog;

pub(crate) use dialog::EntryDialog;

use crate::api::ApiClient;
use crate::identity::load_identity_snapshot;
use crate::models::{JournalEntry, UserProfile};
use leptos::prelude::*;

/// All fields are arena-backed signals, so the whole state is `Copy` and
/// can move into any number of event handlers.
#[derive(Clone, Copy)]
pub(crate) struct AppState {
    pub api_client: RwSignal<ApiClient>,
    pub current_user: RwSignal<Option<UserProfile>>,

    /// Guard: the profile upsert fires once per authenticated session.
    pub user_registered: RwSignal<bool>,

    /// Loaded from backend; always the full list, never a partial page.
    pub entries: RwSignal<Vec<JournalEntry>>,
    pub entries_loading: RwSignal<bool>,
    pub entries_error: RwSignal<Option<String>>,

    /// Stale-response guard: a load result is applied only while its
    /// request id is still the newest.
    pub entries_request_id: RwSignal<u64>,

    /// Explicit invalidation: mutations bump this, the load effect
    /// reloads when it changes.
    pub entries_revision: RwSignal<u64>,

    /// Date filter (`YYYY-MM-DD`), empty = unfiltered. Session-local.
    pub selected_day: RwSignal<String>,

    pub dialog: RwSignal<EntryDialog>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            api_client: RwSignal::new(ApiClient::from_env()),
            current_user: RwSignal::new(load_identity_snapshot()),
            user_registered: RwSignal::new(false),
            entries: RwSignal::new(vec![]),
            entries_loading: RwSignal::new(false),
            entries_error: RwSignal::new(None),
            entries_request_id: RwSignal::new(0),
            entries_revision: RwSignal::new(0),
            selected_day: RwSignal::new(String::new()),
            dialog: RwSignal::new(EntryDialog::Closed),
        }
    }

    pub fn invalidate_entries(&self) {
        self.entries_revision.update(|r| *r = r.saturating_add(1));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);

use crate::models::UserProfile;
use serde::{Deserialize, Serialize};

pub(crate) const PROFILE_KEY: &str = "memory_threads_profile";

pub(crate) fn load_json_from_storage<T: for<'de> Deserialize<'de>>(key: &str) -> Option<T> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
    let json = storage.get_item(key).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

pub(crate) fn save_json_to_storage<T: Serialize>(key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, &json);
        }
    }
}

pub(crate) fn remove_from_storage(key: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(key);
    }
}

/// Local copy of the last-seen provider profile. Used only as a fallback
/// when the provider global is absent on load; the provider stays the
/// source of truth.
pub(crate) fn save_profile_to_storage(profile: &UserProfile) {
    save_json_to_storage(PROFILE_KEY, profile);
}

pub(crate) fn load_profile_from_storage() -> Option<UserProfile> {
    load_json_from_storage(PROFILE_KEY)
}

pub(crate) fn clear_profile_storage() {
    remove_from_storage(PROFILE_KEY);
}

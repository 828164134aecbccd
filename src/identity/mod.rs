use crate::models::UserProfile;
use crate::state::AppContext;
use crate::storage::{clear_profile_storage, load_profile_from_storage, save_profile_to_storage};
use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

/// Registration retry policy: bounded, doubling delay.
const REGISTER_MAX_ATTEMPTS: u32 = 8;
const REGISTER_BASE_DELAY_MS: u32 = 500;
const REGISTER_MAX_DELAY_MS: u32 = 30_000;

/// Read the identity provider's profile snapshot.
///
/// The hosting page's provider widget injects `window.IDENTITY`:
/// - an object: signed in; mirror it to localStorage and use it.
/// - `null`: signed out; drop any stale local copy.
/// - absent: widget not loaded yet; fall back to the stored copy.
pub(crate) fn load_identity_snapshot() -> Option<UserProfile> {
    let window = web_sys::window()?;

    let snapshot = js_sys::Reflect::get(&window, &"IDENTITY".into()).ok()?;

    if snapshot.is_undefined() {
        return load_profile_from_storage();
    }

    if snapshot.is_null() {
        clear_profile_storage();
        return None;
    }

    let json = js_sys::JSON::stringify(&snapshot).ok()?;
    let profile: UserProfile = serde_json::from_str(&String::from(json)).ok()?;
    save_profile_to_storage(&profile);
    Some(profile)
}

/// Mirror the provider profile into the backend's user store.
///
/// Idempotent upsert, fired once per authenticated session. Failures are
/// retried with doubling delay up to the attempt cap, then logged and
/// dropped; the dashboard never blocks on registration.
pub(crate) fn register_user_once(app_state: AppContext) {
    if app_state.0.current_user.get_untracked().is_none() {
        return;
    }
    if app_state.0.user_registered.get_untracked() {
        return;
    }
    app_state.0.user_registered.set(true);

    register_attempt(app_state, 1);
}

fn register_attempt(app_state: AppContext, attempt: u32) {
    let Some(profile) = app_state.0.current_user.get_untracked() else {
        return;
    };
    let api_client = app_state.0.api_client.get_untracked();

    spawn_local(async move {
        match api_client.upsert_user(&profile).await {
            Ok(()) => {}
            Err(e) if attempt < REGISTER_MAX_ATTEMPTS => {
                let delay = (REGISTER_BASE_DELAY_MS.saturating_mul(1 << (attempt - 1)))
                    .min(REGISTER_MAX_DELAY_MS);
                logging::warn!(
                    "user upsert failed (attempt {attempt}), retrying in {delay}ms: {e}"
                );
                schedule_retry(app_state, attempt + 1, delay);
            }
            Err(e) => {
                logging::error!("user upsert failed, giving up: {e}");
            }
        }
    });
}

fn schedule_retry(app_state: AppContext, next_attempt: u32, delay_ms: u32) {
    let cb = wasm_bindgen::closure::Closure::once_into_js(move || {
        register_attempt(app_state, next_attempt);
    });

    let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        delay_ms as i32,
    );
}

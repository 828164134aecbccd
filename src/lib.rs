mod api;
mod app;
mod components;
mod config;
mod identity;
mod models;
mod pages;
mod state;
mod storage;
mod util;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::prelude::mount_to_body(app::App);
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use crate::api::EnvConfig;
    use crate::identity::load_identity_snapshot;
    use crate::models::UserProfile;
    use crate::storage::{
        clear_profile_storage, load_profile_from_storage, save_profile_to_storage,
    };
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_profile_storage_roundtrip() {
        clear_profile_storage();
        assert!(load_profile_from_storage().is_none());

        let profile = UserProfile {
            extra: serde_json::json!({"id": "u_1", "firstName": "Ada"}),
        };
        save_profile_to_storage(&profile);

        let loaded = load_profile_from_storage().expect("should load profile from localStorage");
        assert_eq!(loaded.extra["firstName"], "Ada");

        clear_profile_storage();
        assert!(load_profile_from_storage().is_none());
    }

    #[wasm_bindgen_test]
    fn test_identity_snapshot_falls_back_to_stored_profile() {
        // The test page never injects `window.IDENTITY`, so the snapshot
        // read must fall through to the stored copy.
        let profile = UserProfile {
            extra: serde_json::json!({"id": "u_2", "username": "ada"}),
        };
        save_profile_to_storage(&profile);

        let loaded = load_identity_snapshot().expect("should fall back to stored profile");
        assert_eq!(loaded.extra["username"], "ada");

        clear_profile_storage();
        assert!(load_identity_snapshot().is_none());
    }

    #[wasm_bindgen_test]
    fn test_env_config_defaults_to_same_origin() {
        // No `window.ENV` on the test page: relative `/api/...` paths.
        let cfg = EnvConfig::new();
        assert_eq!(cfg.api_url, "");
    }
}

#[cfg(test)]
mod tests {
    use crate::api::ApiClient;
    use crate::models::{EntryDraft, JournalEntry, UserProfile};

    #[test]
    fn test_journal_entry_contract_deserialize() {
        // Contract based on the document store's wire shape.
        let json = r#"{
            "_id": "65a1c0ffee",
            "title": "First snow",
            "content": "We walked to the lake.",
            "specialLink": "https://media.example.com/clip",
            "image": "https://cdn.example.com/photo.jpg",
            "dateCreated": "2024-01-05T23:00:00Z"
        }"#;

        let parsed: JournalEntry = serde_json::from_str(json).expect("entry should parse");
        assert_eq!(parsed.id, "65a1c0ffee");
        assert_eq!(parsed.title, "First snow");
        assert_eq!(parsed.special_link.as_deref(), Some("https://media.example.com/clip"));
        assert_eq!(parsed.date_created, "2024-01-05T23:00:00Z");
    }

    #[test]
    fn test_journal_entry_optional_fields_may_be_absent() {
        let json = r#"{
            "_id": "65a1c0ffee",
            "title": "A",
            "content": "B",
            "dateCreated": "2024-01-05T23:00:00Z"
        }"#;

        let parsed: JournalEntry = serde_json::from_str(json).expect("entry should parse");
        assert!(parsed.special_link.is_none());
        assert!(parsed.image.is_none());
    }

    #[test]
    fn test_entry_draft_serializes_wire_keys() {
        let draft = EntryDraft {
            title: "A".to_string(),
            content: "B".to_string(),
            special_link: "https://media.example.com/clip".to_string(),
            image: String::new(),
        };

        let v = serde_json::to_value(draft).expect("should serialize");
        assert_eq!(v["title"], "A");
        assert_eq!(v["content"], "B");
        assert_eq!(v["specialLink"], "https://media.example.com/clip");
        assert_eq!(v["image"], "");
        // The client never sends store-assigned fields.
        assert!(v.get("_id").is_none());
        assert!(v.get("dateCreated").is_none());
    }

    #[test]
    fn test_parse_entry_list_accepts_bare_array() {
        let data = serde_json::json!([
            {"_id": "1", "title": "A", "content": "x", "dateCreated": "2024-01-05T23:00:00Z"},
            {"_id": "2", "title": "B", "content": "y", "dateCreated": "2024-01-06T10:00:00Z"}
        ]);

        let list = ApiClient::parse_entry_list_response(data);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, "1");
        assert_eq!(list[1].title, "B");
    }

    #[test]
    fn test_parse_entry_list_accepts_wrapped_array() {
        let data = serde_json::json!({
            "journalEntries": [
                {"_id": "1", "title": "A", "content": "x", "dateCreated": "2024-01-05T23:00:00Z"}
            ]
        });

        let list = ApiClient::parse_entry_list_response(data);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "1");
    }

    #[test]
    fn test_parse_entry_list_skips_malformed_items() {
        let data = serde_json::json!([
            {"_id": "1", "title": "A", "content": "x", "dateCreated": "2024-01-05T23:00:00Z"},
            {"title": "missing id and date"},
            {"_id": "   ", "title": "B", "content": "y", "dateCreated": "2024-01-06T10:00:00Z"},
            42
        ]);

        let list = ApiClient::parse_entry_list_response(data);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "1");
    }

    #[test]
    fn test_user_profile_is_schema_flexible() {
        let json = r#"{"id": "u_1", "firstName": "Ada", "unexpected": {"nested": true}}"#;
        let parsed: UserProfile = serde_json::from_str(json).expect("profile should parse");
        assert_eq!(parsed.display_name().as_deref(), Some("Ada"));

        // Round-trips the provider object untouched.
        let v = serde_json::to_value(parsed).expect("should serialize");
        assert_eq!(v["unexpected"]["nested"], true);
    }

    #[test]
    fn test_user_profile_display_name_fallbacks() {
        let parsed: UserProfile =
            serde_json::from_str(r#"{"username": "ada"}"#).expect("profile should parse");
        assert_eq!(parsed.display_name().as_deref(), Some("ada"));

        let parsed: UserProfile =
            serde_json::from_str(r#"{"id": "u_1"}"#).expect("profile should parse");
        assert!(parsed.display_name().is_none());
    }

    #[test]
    fn test_api_client_paths() {
        let client = ApiClient::new(String::new());
        assert_eq!(client.base_url, "");
        assert_eq!(ApiClient::entry_path("65a1c0ffee"), "/api/journalEntries/65a1c0ffee");
    }
}

use serde::{Deserialize, Serialize};

/// Identity-provider profile object.
///
/// The provider owns this schema; we mirror it to the backend verbatim.
/// Kept flexible to avoid breaking when provider fields evolve.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct UserProfile {
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl UserProfile {
    /// Best-effort display name for the header greeting.
    pub fn display_name(&self) -> Option<String> {
        for key in ["firstName", "username", "fullName"] {
            if let Some(s) = self.extra.get(key).and_then(|v| v.as_str()) {
                if !s.trim().is_empty() {
                    return Some(s.to_string());
                }
            }
        }
        None
    }
}

/// A journal entry as stored by the backend's document database.
///
/// `id` and `date_created` are store-assigned and immutable; updates
/// replace the remaining fields in place.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct JournalEntry {
    #[serde(rename = "_id")]
    pub id: String,

    pub title: String,
    pub content: String,

    #[serde(rename = "specialLink", default)]
    pub special_link: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    /// RFC 3339 UTC timestamp assigned by the store at creation.
    #[serde(rename = "dateCreated")]
    pub date_created: String,
}

/// Form payload for create and update. The store assigns everything else.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub(crate) struct EntryDraft {
    pub title: String,
    pub content: String,

    #[serde(rename = "specialLink")]
    pub special_link: String,

    pub image: String,
}

impl EntryDraft {
    pub fn from_entry(e: &JournalEntry) -> Self {
        Self {
            title: e.title.clone(),
            content: e.content.clone(),
            special_link: e.special_link.clone().unwrap_or_default(),
            image: e.image.clone().unwrap_or_default(),
        }
    }
}

use crate::models::{EntryDraft, JournalEntry, UserProfile};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Unauthorized,
    Network,
    Http,
    Parse,
}

#[derive(Clone, Debug)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn unauthorized() -> Self {
        Self {
            kind: ApiErrorKind::Unauthorized,
            message: "Unauthorized".to_string(),
        }
    }

    fn http(status: reqwest::StatusCode, body: String, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{ctx} ({status}): {body}"),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        // Empty base means same-origin, application-relative paths.
        let default_api_url = String::new();

        // We support BOTH `window.ENV.API_URL` (documented in README) and
        // `window.ENV.api_url` (legacy/implementation detail) for compatibility.
        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    // 1) Prefer README style: API_URL
                    if let Ok(api_url) = js_sys::Reflect::get(&env, &"API_URL".into()) {
                        if let Some(url_str) = api_url.as_string() {
                            return Self { api_url: url_str };
                        }
                    }

                    // 2) Fallback: api_url
                    if let Ok(api_url) = js_sys::Reflect::get(&env, &"api_url".into()) {
                        if let Some(url_str) = api_url.as_string() {
                            return Self { api_url: url_str };
                        }
                    }
                }
            }
        }

        Self {
            api_url: default_api_url,
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn get_api_url() -> String {
    EnvConfig::new().api_url
}

/// Client for the journal REST surface. Authentication rides on the
/// identity provider's session cookie; the client itself is stateless.
#[derive(Clone)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn from_env() -> Self {
        Self {
            base_url: get_api_url(),
        }
    }

    pub(crate) fn entry_path(id: &str) -> String {
        format!("/api/journalEntries/{id}")
    }

    async fn send(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&impl serde::Serialize>,
    ) -> ApiResult<reqwest::Response> {
        let client = reqwest::Client::new();
        let url = format!("{}{}", self.base_url, path);
        let mut req = client.request(method, url);

        if let Some(b) = body {
            req = req.json(b);
        }

        let res = req.send().await.map_err(ApiError::network)?;

        if res.status().is_success() {
            Ok(res)
        } else if res.status().as_u16() == 401 {
            Err(ApiError::unauthorized())
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, body, "Request failed"))
        }
    }

    async fn request_json<T: serde::de::DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&impl serde::Serialize>,
    ) -> ApiResult<T> {
        let res = self.send(method, path, body).await?;
        res.json().await.map_err(ApiError::parse)
    }

    async fn request_no_content(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> ApiResult<()> {
        self.send(method, path, None::<&()>).await?;
        Ok(())
    }

    /// The store has returned the list both bare and wrapped; accept both.
    pub(crate) fn parse_entry_list_response(data: serde_json::Value) -> Vec<JournalEntry> {
        let list = if data.is_array() {
            data.as_array().cloned().unwrap_or_default()
        } else {
            data.get("journalEntries")
                .or_else(|| data.get("entries"))
                .and_then(|v| v.as_array())
                .cloned()
                .unwrap_or_default()
        };

        list.into_iter()
            .filter_map(|item| serde_json::from_value::<JournalEntry>(item).ok())
            .filter(|e| !e.id.trim().is_empty())
            .collect()
    }

    pub async fn list_entries(&self) -> ApiResult<Vec<JournalEntry>> {
        let data: serde_json::Value = self
            .request_json(reqwest::Method::GET, "/api/journalEntries", None::<&()>)
            .await?;
        Ok(Self::parse_entry_list_response(data))
    }

    pub async fn create_entry(&self, draft: &EntryDraft) -> ApiResult<JournalEntry> {
        self.request_json(reqwest::Method::POST, "/api/journalEntries", Some(draft))
            .await
    }

    pub async fn update_entry(&self, id: &str, draft: &EntryDraft) -> ApiResult<JournalEntry> {
        self.request_json(reqwest::Method::PUT, &Self::entry_path(id), Some(draft))
            .await
    }

    pub async fn delete_entry(&self, id: &str) -> ApiResult<()> {
        self.request_no_content(reqwest::Method::DELETE, &Self::entry_path(id))
            .await
    }

    /// Idempotent upsert of the provider profile into the backend's user
    /// store. The response body is not inspected beyond the status line.
    pub async fn upsert_user(&self, profile: &UserProfile) -> ApiResult<()> {
        self.send(reqwest::Method::POST, "/api/users", Some(profile))
            .await?;
        Ok(())
    }
}

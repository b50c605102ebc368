//! HTTP API Client
//!
//! Functions for communicating with the activity sign-up REST API.

use gloo_net::http::Request;

use crate::state::catalog::Catalog;

/// Local storage key holding an API base URL override
const API_BASE_KEY: &str = "activity_board_api_url";

/// Default API base: the origin the app itself was served from
fn default_api_base() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

/// Get the API base URL from local storage or fall back to the window origin
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_KEY) {
                url
            } else {
                default_api_base()
            }
        } else {
            default_api_base()
        }
    } else {
        String::new()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL override in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_BASE_KEY, url);
        }
    }
}

// ============ Response Types ============

/// Success envelope for signup and unregister
#[derive(Debug, serde::Deserialize)]
struct ActionMessage {
    message: String,
}

/// Failure envelope for signup and unregister
#[derive(Debug, serde::Deserialize)]
struct ActionDetail {
    #[serde(default)]
    detail: Option<String>,
}

impl ActionDetail {
    /// The user-facing failure text, with the generic fallback when the
    /// body carried no detail
    fn into_message(self) -> String {
        self.detail
            .unwrap_or_else(|| "An error occurred".to_string())
    }
}

/// Endpoint path for a per-activity action, with the activity name and
/// email percent-encoded
fn action_url(base: &str, activity: &str, action: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/{}?email={}",
        base,
        urlencoding::encode(activity),
        action,
        urlencoding::encode(email)
    )
}

// ============ API Functions ============

/// Fetch the full activity catalog
pub async fn fetch_activities() -> Result<Catalog, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/activities", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Unexpected status: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Sign an email up for an activity. Ok carries the server's confirmation
/// message, Err the user-facing failure text.
pub async fn signup(activity: &str, email: &str) -> Result<String, String> {
    let api_base = get_api_base();
    let url = action_url(&api_base, activity, "signup", email);

    let response = Request::post(&url).send().await.map_err(|e| {
        web_sys::console::error_1(&format!("Signup request failed: {}", e).into());
        "Failed to sign up. Please try again.".to_string()
    })?;

    if !response.ok() {
        let error: ActionDetail = response.json().await.unwrap_or(ActionDetail { detail: None });
        return Err(error.into_message());
    }

    let result: ActionMessage = response.json().await.map_err(|e| {
        web_sys::console::error_1(&format!("Signup response unreadable: {}", e).into());
        "Failed to sign up. Please try again.".to_string()
    })?;

    Ok(result.message)
}

/// Remove an email from an activity's roster. Ok carries the server's
/// confirmation message, Err the user-facing failure text.
pub async fn unregister(activity: &str, email: &str) -> Result<String, String> {
    let api_base = get_api_base();
    let url = action_url(&api_base, activity, "unregister", email);

    let response = Request::delete(&url).send().await.map_err(|e| {
        web_sys::console::error_1(&format!("Unregister request failed: {}", e).into());
        "Failed to unregister. Please try again.".to_string()
    })?;

    if !response.ok() {
        let error: ActionDetail = response.json().await.unwrap_or(ActionDetail { detail: None });
        return Err(error.into_message());
    }

    let result: ActionMessage = response.json().await.map_err(|e| {
        web_sys::console::error_1(&format!("Unregister response unreadable: {}", e).into());
        "Failed to unregister. Please try again.".to_string()
    })?;

    Ok(result.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_url_encodes_activity_and_email() {
        let url = action_url("http://localhost:8000", "Chess Club", "signup", "alex@example.com");
        assert_eq!(
            url,
            "http://localhost:8000/activities/Chess%20Club/signup?email=alex%40example.com"
        );
    }

    #[test]
    fn test_action_url_handles_reserved_characters() {
        let url = action_url("", "Arts & Crafts", "unregister", "sam+club@example.com");
        assert_eq!(
            url,
            "/activities/Arts%20%26%20Crafts/unregister?email=sam%2Bclub%40example.com"
        );
    }

    #[test]
    fn test_detail_envelope_prefers_server_text() {
        let error: ActionDetail = serde_json::from_str(r#"{"detail": "Already signed up"}"#).unwrap();
        assert_eq!(error.into_message(), "Already signed up");
    }

    #[test]
    fn test_detail_envelope_falls_back_when_empty() {
        let error: ActionDetail = serde_json::from_str("{}").unwrap();
        assert_eq!(error.into_message(), "An error occurred");
    }

    #[test]
    fn test_message_envelope_decodes() {
        let result: ActionMessage =
            serde_json::from_str(r#"{"message": "Signed up alex@example.com for Chess Club"}"#)
                .unwrap();
        assert_eq!(result.message, "Signed up alex@example.com for Chess Club");
    }
}

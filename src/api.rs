use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use wasm_bindgen::JsCast;

use crate::theme::Theme;

/// Endpoint that flips the session theme. Each call means "toggle from
/// whatever the server currently holds"; the client never sends a value.
const TOGGLE_THEME_URL: &str = "/toggle-theme/";

/// Bound on the toggle round-trip. A slower server counts as a failure and
/// the user re-clicks.
const TOGGLE_TIMEOUT_MS: u32 = 10_000;

/// Reply from the theme service. Transient: decoded once per request,
/// never persisted client-side.
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleThemeResponse {
    pub success: bool,
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Ask the server to flip the session theme and return the new value.
pub async fn toggle_theme() -> Result<ToggleThemeResponse, String> {
    let request = send_toggle();
    let timeout = TimeoutFuture::new(TOGGLE_TIMEOUT_MS);
    futures::pin_mut!(request, timeout);
    match select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err("theme service timed out".to_string()),
    }
}

async fn send_toggle() -> Result<ToggleThemeResponse, String> {
    let token = csrf_token().ok_or_else(|| "missing csrftoken cookie".to_string())?;
    let resp = gloo_net::http::Request::post(TOGGLE_THEME_URL)
        .header("X-CSRFToken", &token)
        .json(&serde_json::json!({}))
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !resp.ok() {
        return Err(format!("theme service returned {}", resp.status()));
    }
    resp.json::<ToggleThemeResponse>()
        .await
        .map_err(|e| e.to_string())
}

/// The CSRF token the server set for this session, if any.
fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let cookies = document
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?
        .cookie()
        .ok()?;
    cookie_value(&cookies, "csrftoken")
}

/// Find `name` in a `document.cookie` string.
fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|part| {
        let (key, value) = part.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

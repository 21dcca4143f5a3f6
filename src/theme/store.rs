//! Durable guest preference: one localStorage key scoped to the origin.

use super::Theme;

const STORAGE_KEY: &str = "siteTheme";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the persisted preference. Absent or unrecognized values mean the
/// guest has never chosen; the caller falls back to the served variant.
pub fn load() -> Option<Theme> {
    storage()
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .and_then(|v| Theme::parse(&v))
}

/// Persist the preference, normalized to its lowercase form.
pub fn save(theme: Theme) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

pub mod guest;
pub mod renderer;
pub mod session;
pub mod store;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Marker substrings distinguishing the two stylesheet variants. Variant
/// detection and switching is pure substring work; the stylesheets are
/// never fetched or parsed by the client.
const LIGHT_SHEET: &str = "light-theme.css";
const DARK_SHEET: &str = "dark-theme.css";

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    pub set_theme: WriteSignal<Theme>,
}

/// The light/dark appearance mode of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Case-insensitive parse. Anything unrecognized means no preference.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Affordance label: names the mode a click would switch *to*.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }

    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon me-1",
            Theme::Dark => "fas fa-sun me-1",
        }
    }
}

/// Which variant an href points at. Hrefs without the light marker are
/// treated as dark, matching how the server serves pages.
pub fn variant_of(href: &str) -> Theme {
    if href.contains(LIGHT_SHEET) {
        Theme::Light
    } else {
        Theme::Dark
    }
}

/// Rewrite `href` to point at `theme`'s stylesheet variant. An href already
/// on the target variant comes back unchanged.
pub fn href_for(href: &str, theme: Theme) -> String {
    match theme {
        Theme::Light => href.replace(DARK_SHEET, LIGHT_SHEET),
        Theme::Dark => href.replace(LIGHT_SHEET, DARK_SHEET),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("DARK"), Some(Theme::Dark));
        assert_eq!(Theme::parse("Light"), Some(Theme::Light));
    }

    #[test]
    fn parse_rejects_unrecognized_values() {
        assert_eq!(Theme::parse(""), None);
        assert_eq!(Theme::parse("system"), None);
        assert_eq!(Theme::parse("darkish"), None);
    }

    #[test]
    fn opposite_is_an_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.opposite().opposite(), theme);
            assert_ne!(theme.opposite(), theme);
        }
    }

    #[test]
    fn toggle_parity_over_many_clicks() {
        for start in [Theme::Light, Theme::Dark] {
            let mut theme = start;
            for n in 1..=10 {
                theme = theme.opposite();
                if n % 2 == 0 {
                    assert_eq!(theme, start);
                } else {
                    assert_eq!(theme, start.opposite());
                }
            }
        }
    }

    #[test]
    fn label_names_the_mode_you_would_switch_to() {
        assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
        assert_eq!(Theme::Dark.toggle_label(), "Light Mode");
    }

    #[test]
    fn variant_of_detects_light_and_falls_back_to_dark() {
        assert_eq!(variant_of("/static/css/light-theme.css"), Theme::Light);
        assert_eq!(variant_of("/static/css/dark-theme.css"), Theme::Dark);
        assert_eq!(variant_of("/static/css/site.css"), Theme::Dark);
    }

    #[test]
    fn href_for_swaps_the_variant_marker() {
        assert_eq!(
            href_for("/static/css/light-theme.css", Theme::Dark),
            "/static/css/dark-theme.css"
        );
        assert_eq!(
            href_for("/static/css/dark-theme.css", Theme::Light),
            "/static/css/light-theme.css"
        );
    }

    #[test]
    fn href_for_is_identity_on_matching_hrefs() {
        let light = "/static/css/light-theme.css";
        assert_eq!(href_for(light, Theme::Light), light);
        // Applying twice renders the same state as applying once.
        let once = href_for(light, Theme::Dark);
        assert_eq!(href_for(&once, Theme::Dark), once);
    }

    #[test]
    fn wire_format_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, Theme::Light);
    }
}

//! Appearance application. Every path that changes the visible theme
//! funnels through [`Appearance::apply`] so the stylesheet reference and
//! the document theme attribute can never drift apart.

use super::{href_for, variant_of, Theme};

/// Handle to the server-rendered swappable stylesheet link. Pages without
/// the link have no appearance to manage and get no handle, which is what
/// makes the controllers inert on layouts that lack the feature.
pub struct Appearance {
    link: web_sys::Element,
}

impl Appearance {
    /// Element id of the swappable stylesheet link.
    const LINK_ID: &'static str = "theme-css";

    pub fn locate() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let link = document.get_element_by_id(Self::LINK_ID)?;
        Some(Self { link })
    }

    /// The variant the document is currently rendered with.
    pub fn current(&self) -> Theme {
        variant_of(&self.link.get_attribute("href").unwrap_or_default())
    }

    /// Apply `theme` to the document: rewrite the stylesheet reference only
    /// when it does not already point at the target variant (no redundant
    /// reflow), and restamp the `data-theme` attribute unconditionally.
    pub fn apply(&self, theme: Theme) {
        if let Some(href) = self.link.get_attribute("href") {
            let target = href_for(&href, theme);
            if target != href {
                let _ = self.link.set_attribute("href", &target);
            }
        }
        if let Some(html) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = html.set_attribute("data-theme", theme.as_str());
        }
    }
}

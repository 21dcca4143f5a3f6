//! Theme controller for anonymous sessions: fully synchronous, no network.
//! The preference lives in localStorage and the rendered stylesheet is the
//! source of truth for the current state.

use leptos::prelude::*;

use super::renderer::Appearance;
use super::{store, Theme, ThemeContext};

/// Resolve and apply the initial guest theme. A recognized stored
/// preference wins; otherwise the variant the page was served with is
/// kept, so the toggle always matches what the user currently sees even
/// before any client-side write has occurred.
pub fn initialize(set_theme: WriteSignal<Theme>) {
    let Some(appearance) = Appearance::locate() else {
        // Page without the guest layout.
        return;
    };
    let theme = store::load().unwrap_or_else(|| appearance.current());
    appearance.apply(theme);
    set_theme.set(theme);
}

#[component]
pub fn GuestThemeToggle() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();

    // Each click flips relative to the rendered stylesheet, not a cached
    // intention, so rapid repeated clicks can never desync the store from
    // the document.
    let on_toggle = move |_| {
        let Some(appearance) = Appearance::locate() else {
            return;
        };
        let next = appearance.current().opposite();
        store::save(next);
        appearance.apply(next);
        ctx.set_theme.set(next);
    };

    view! {
        <button id="guest-theme-toggle" class="btn btn-theme" on:click=on_toggle>
            <i class=move || ctx.theme.get().toggle_icon()></i>
            {move || format!(" {}", ctx.theme.get().toggle_label())}
        </button>
    }
}

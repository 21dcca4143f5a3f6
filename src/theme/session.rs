//! Theme controller for signed-in sessions. The server owns the
//! preference; the client only requests a flip and reloads so every
//! server-rendered theme-dependent surface comes back consistent.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::ThemeContext;
use crate::api;

/// Whether the server stamped this page as belonging to a signed-in user.
/// Guest and member layouts are mutually exclusive, so at most one theme
/// controller ever writes to the document per page instance.
pub fn is_authenticated() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|b| b.get_attribute("data-authenticated"))
        .map(|v| v == "true")
        .unwrap_or(false)
}

fn reload() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

#[component]
pub fn SessionThemeToggle() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();

    // Double-clicks may race two requests; the service is a strict
    // flip-and-return, and the client never sends the value it wants, so
    // racing is safe.
    let on_toggle = move |_| {
        spawn_local(async move {
            match api::toggle_theme().await {
                Ok(resp) if resp.success => {
                    if let Some(theme) = resp.theme {
                        ctx.set_theme.set(theme);
                    }
                    // Server markup beyond the stylesheet depends on the
                    // theme; a full reload is the consistency boundary.
                    reload();
                }
                Ok(resp) => {
                    log::error!(
                        "theme toggle failed: {}",
                        resp.error.as_deref().unwrap_or("unknown error")
                    );
                }
                Err(e) => {
                    log::error!("error toggling theme: {e}");
                }
            }
        });
    };

    view! {
        <button id="theme-toggle" class="btn btn-theme" on:click=on_toggle>
            <i class=move || ctx.theme.get().toggle_icon()></i>
            {move || format!(" {}", ctx.theme.get().toggle_label())}
        </button>
    }
}

use leptos::prelude::*;

use crate::theme::guest::GuestThemeToggle;
use crate::theme::session::{is_authenticated, SessionThemeToggle};

#[component]
pub fn Navbar() -> impl IntoView {
    // The server renders mutually exclusive layouts for guests and
    // members; whichever toggle mounts here is the only theme writer for
    // this page instance.
    let authenticated = is_authenticated();

    view! {
        <nav class="navbar">
            <div class="navbar-header">
                <h1 class="navbar-title">"Membership Portal"</h1>
                <p class="navbar-subtitle">"Member services"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Home"</a>
                </li>
                <li class="nav-item">
                    <a href="/profile" class="nav-link">"My Profile"</a>
                </li>
                <li class="nav-item">
                    <a href="/payment" class="nav-link">"Payment"</a>
                </li>
            </ul>
            <div class="nav-theme">
                {if authenticated {
                    view! { <SessionThemeToggle /> }.into_any()
                } else {
                    view! { <GuestThemeToggle /> }.into_any()
                }}
            </div>
        </nav>
    }
}

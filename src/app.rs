use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::navbar::Navbar;
use crate::pages::home::HomePage;
use crate::pages::payment::PaymentPage;
use crate::pages::profile::ProfilePage;
use crate::theme::renderer::Appearance;
use crate::theme::{guest, session, Theme, ThemeContext};

#[component]
pub fn App() -> impl IntoView {
    let (theme, set_theme) = signal(Theme::Light);
    provide_context(ThemeContext { theme, set_theme });

    // Resolve the initial appearance on mount. Guest pages reconcile the
    // stored preference with the served stylesheet; signed-in pages were
    // rendered from the server-held preference, so only the signal needs
    // to catch up for the affordance label.
    Effect::new(move |_| {
        if session::is_authenticated() {
            if let Some(appearance) = Appearance::locate() {
                set_theme.set(appearance.current());
            }
        } else {
            guest::initialize(set_theme);
        }
    });

    view! {
        <Router>
            <div class="app-layout">
                <Navbar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/profile") view=ProfilePage />
                        <Route path=path!("/payment") view=PaymentPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

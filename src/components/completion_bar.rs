use leptos::prelude::*;

use crate::progress::Completion;

/// Labeled, color-banded indicator for profile completion.
#[component]
pub fn CompletionBar(
    /// The derived completion snapshot to render
    #[prop(into)]
    completion: Signal<Completion>,
) -> impl IntoView {
    view! {
        <div class="progress">
            <div
                id="profileProgress"
                class=move || format!("progress-bar {}", completion.get().band().class())
                style:width=move || format!("{}%", completion.get().percent)
                role="progressbar"
                aria-valuenow=move || completion.get().percent.to_string()
                aria-valuemin="0"
                aria-valuemax="100"
            >
                {move || format!("{}%", completion.get().percent)}
            </div>
        </div>
    }
}

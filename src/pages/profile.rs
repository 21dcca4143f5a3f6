use leptos::prelude::*;

use crate::components::completion_bar::CompletionBar;
use crate::progress::{Completion, REQUIRED_FIELDS};
use crate::validate;

/// Display labels for the required fields, in `REQUIRED_FIELDS` order.
const FIELD_LABELS: [&str; 8] = [
    "First Name",
    "Last Name",
    "Email",
    "Phone Number",
    "Street",
    "City",
    "State",
    "Zip Code",
];

#[component]
pub fn ProfilePage() -> impl IntoView {
    // One signal per required field; the completion snapshot is derived
    // from scratch whenever any of them changes.
    let fields: [RwSignal<String>; 8] = std::array::from_fn(|_| RwSignal::new(String::new()));

    let completion = Memo::new(move |_| {
        let values: Vec<String> = fields.iter().map(|f| f.get()).collect();
        Completion::measure(values.iter().map(String::as_str))
    });

    view! {
        <div class="page profile-page">
            <h2>"My Profile"</h2>

            <div class="profile-completion">
                <label>"Profile Completion"</label>
                <CompletionBar completion=completion />
            </div>

            <form
                id="profileForm"
                class="profile-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| ev.prevent_default()
            >
                {REQUIRED_FIELDS
                    .iter()
                    .zip(FIELD_LABELS.iter())
                    .zip(fields.iter())
                    .map(|((id, label), value)| {
                        let id = *id;
                        let label = *label;
                        let value = *value;
                        view! {
                            <div class="form-group">
                                <label for=id>{label}</label>
                                <input
                                    id=id
                                    type="text"
                                    class="input"
                                    prop:value=move || value.get()
                                    on:input=move |ev| value.set(event_target_value(&ev))
                                />
                            </div>
                        }
                    })
                    .collect_view()}
            </form>

            <FamilySection />
        </div>
    }
}

/// Child registration for family memberships. Adding a child is blocked
/// until both names pass validation.
#[component]
fn FamilySection() -> impl IntoView {
    let (child_first, set_child_first) = signal(String::new());
    let (child_last, set_child_last) = signal(String::new());
    let (children, set_children) = signal(Vec::<String>::new());
    let (error_message, set_error_message) = signal::<Option<String>>(None);

    let add_child = move |_| {
        let first = child_first.get();
        let last = child_last.get();
        match validate::child_name(&first, &last) {
            Ok(()) => {
                set_children.update(|c| c.push(format!("{} {}", first.trim(), last.trim())));
                set_child_first.set(String::new());
                set_child_last.set(String::new());
                set_error_message.set(None);
            }
            Err(msg) => {
                set_error_message.set(Some(msg));
            }
        }
    };

    view! {
        <section id="familySection" class="family-section">
            <h3>"Family Members"</h3>
            <p class="section-description">"Add children covered by a family membership."</p>

            <div class="input-row">
                <input
                    type="text"
                    placeholder="Child first name"
                    class="input"
                    prop:value=move || child_first.get()
                    on:input=move |ev| set_child_first.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Child last name"
                    class="input"
                    prop:value=move || child_last.get()
                    on:input=move |ev| set_child_last.set(event_target_value(&ev))
                />
                <button class="btn btn-save" on:click=add_child>"Add Child"</button>
            </div>
            <Show when=move || error_message.get().is_some()>
                <span class="status-text status-error">
                    {move || error_message.get().unwrap_or_default()}
                </span>
            </Show>

            <ul class="child-list">
                {move || {
                    children
                        .get()
                        .into_iter()
                        .map(|name| view! { <li class="child-item">{name}</li> })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}

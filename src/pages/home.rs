use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <h2>"Welcome to the Membership Portal"</h2>
            <p class="page-description">
                "Manage your membership, contact details, and payments in one place."
            </p>

            <div class="card-grid">
                <div class="card">
                    <h3>"My Profile"</h3>
                    <p>"Keep your contact details current and track how complete your profile is"</p>
                    <a href="/profile" class="btn btn-primary">"Edit Profile"</a>
                </div>
                <div class="card">
                    <h3>"Payment"</h3>
                    <p>"Pay your membership dues"</p>
                    <a href="/payment" class="btn btn-primary">"Make a Payment"</a>
                </div>
            </div>
        </div>
    }
}

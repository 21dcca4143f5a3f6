use leptos::prelude::*;

use crate::validate;

#[component]
pub fn PaymentPage() -> impl IntoView {
    let (card_number, set_card_number) = signal(String::new());
    let (card_name, set_card_name) = signal(String::new());
    let (expiry, set_expiry) = signal(String::new());
    let (cvv, set_cvv) = signal(String::new());
    let (error_message, set_error_message) = signal::<Option<String>>(None);

    // Validation gates the native submission; the payment itself is
    // handled server-side.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        let result = validate::payment_form(
            &card_number.get(),
            &card_name.get(),
            &expiry.get(),
            &cvv.get(),
        );
        if let Err(msg) = result {
            ev.prevent_default();
            set_error_message.set(Some(msg));
        } else {
            set_error_message.set(None);
        }
    };

    view! {
        <div class="page payment-page">
            <h2>"Membership Payment"</h2>
            <p class="page-description">"Pay your membership dues."</p>

            <form action="/payment/" method="post" class="payment-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="cardNumber">"Card Number"</label>
                    <input
                        id="cardNumber"
                        type="text"
                        placeholder="1234 5678 9012 3456"
                        class="input"
                        prop:value=move || card_number.get()
                        on:input=move |ev| set_card_number.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="cardName">"Name on Card"</label>
                    <input
                        id="cardName"
                        type="text"
                        class="input"
                        prop:value=move || card_name.get()
                        on:input=move |ev| set_card_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="input-row">
                    <div class="form-group">
                        <label for="expiryDate">"Expiry"</label>
                        <input
                            id="expiryDate"
                            type="text"
                            placeholder="MM/YY"
                            class="input"
                            prop:value=move || expiry.get()
                            on:input=move |ev| set_expiry.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="cvv">"CVV"</label>
                        <input
                            id="cvv"
                            type="password"
                            class="input"
                            prop:value=move || cvv.get()
                            on:input=move |ev| set_cvv.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <Show when=move || error_message.get().is_some()>
                    <span class="status-text status-error">
                        {move || error_message.get().unwrap_or_default()}
                    </span>
                </Show>
                <button type="submit" class="btn btn-primary">"Pay Now"</button>
            </form>
        </div>
    }
}

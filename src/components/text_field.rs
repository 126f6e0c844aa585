//! Text Field Component
//!
//! Label, controlled input and inline error slot.

use leptos::prelude::*;

use crate::validate::{message_for, FieldErrors};

#[component]
pub fn TextField(
    #[prop(into)] id: String,
    /// Submission name, also the key of its errors
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    #[prop(optional, into)] placeholder: String,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let error_key = name.clone();

    view! {
        <label for=id.clone()>{label}</label>
        <input
            type="text"
            id=id
            name=name
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
        <div class="error-message">{move || message_for(&errors.get(), &error_key)}</div>
    }
}

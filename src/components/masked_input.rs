//! Masked Input Component
//!
//! Text field that re-applies a display mask on every keystroke.
//! The enclosing form strips it back to digits on submit.

use form_mask::MaskKind;
use leptos::prelude::*;

use crate::validate::{message_for, FieldErrors};

#[component]
pub fn MaskedInput(
    kind: MaskKind,
    #[prop(into)] id: String,
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    #[prop(optional, into)] placeholder: String,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    // Values loaded for editing arrive as raw digits
    value.update_untracked(|v| *v = kind.format(v));
    let error_key = name.clone();

    view! {
        <label for=id.clone()>{label}</label>
        <input
            type="text"
            id=id
            name=name
            placeholder=placeholder
            inputmode="numeric"
            prop:value=move || value.get()
            on:input=move |ev| value.set(kind.format(&event_target_value(&ev)))
        />
        <div class="error-message">{move || message_for(&errors.get(), &error_key)}</div>
    }
}

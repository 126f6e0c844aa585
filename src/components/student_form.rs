//! Student Form Component
//!
//! Student registration with masked CPF and phone fields. Posts natively to
//! the backend; masked values are stripped to digits just before.

use form_mask::MaskKind;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{MaskedInput, TextField};
use crate::context::FormsContext;
use crate::models::StudentDraft;
use crate::validate::{validate_student, FieldErrors};

pub const STUDENT_CREATE_ACTION: &str = "/web/alunos/criar";

#[component]
pub fn StudentForm() -> impl IntoView {
    let ctx = use_context::<FormsContext>().expect("FormsContext should be provided");

    let nome = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let telefone = RwSignal::new(String::new());
    let cpf = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        let draft = StudentDraft {
            nome: nome.get_untracked(),
            email: email.get_untracked(),
            telefone: telefone.get_untracked(),
            cpf: cpf.get_untracked(),
        };
        let found = validate_student(&draft);
        if !found.is_empty() {
            ev.prevent_default();
            tracing::info!("[StudentForm] {} invalid field(s)", found.len());
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        if let Some(form) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlFormElement>().ok()) {
            ctx.unmask(&form);
        }
    };

    view! {
        <form class="student-form" method="post" action=STUDENT_CREATE_ACTION on:submit=on_submit>
            <TextField id="nome" name="nome" label="Nome:" value=nome errors=errors />
            <TextField id="email" name="email" label="Email:" value=email errors=errors />
            <MaskedInput
                kind=MaskKind::Identifier
                id="cpf"
                name="cpf"
                label="CPF:"
                placeholder="000.000.000-00"
                value=cpf
                errors=errors
            />
            <MaskedInput
                kind=MaskKind::Phone
                id="telefone"
                name="telefone"
                label="Telefone:"
                placeholder="(00) 00000-0000"
                value=telefone
                errors=errors
            />
            <button type="submit">"Salvar"</button>
        </form>
    }
}

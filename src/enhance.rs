//! Server-rendered Page Enhancement
//!
//! Binds masks and repeatable rows onto markup the backend rendered:
//! - masked inputs are re-masked on load and on every `input` event
//! - forms holding masked inputs strip them to digits on `submit`
//! - each configured container gets append/remove handling
//!
//! Elements missing from the page are skipped.

use form_mask::{strip_formatting, MaskKind};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement, HtmlInputElement};

use crate::config::FormsConfig;
use crate::error::FormsError;

/// Whether the page carries any field or container from the config
pub fn has_server_markup(document: &Document, config: &FormsConfig) -> bool {
    config.masked_fields.iter().any(|f| document.get_element_by_id(&f.id).is_some())
        || config
            .row_containers
            .iter()
            .any(|c| document.get_element_by_id(&c.container_id).is_some())
}

/// Bind everything the page carries. A binding that fails is logged and
/// the rest still run; returns how many failed.
pub fn enhance_document(document: &Document, config: &FormsConfig) -> usize {
    let mut forms: Vec<HtmlFormElement> = Vec::new();
    let mut inputs = Vec::new();

    for field in &config.masked_fields {
        let Some(input) = input_by_id(document, &field.id) else {
            tracing::debug!("[Masks] #{} not on page", field.id);
            continue;
        };
        if let Some(form) = input.form() {
            if !forms.contains(&form) {
                forms.push(form);
            }
        }
        inputs.push((field, input));
    }

    let mut failed = bind_each(&inputs, |(field, input)| {
        bind_mask(input, field.kind).map_err(|e| (format!("mask on #{}", field.id), e))
    });
    failed += bind_each(&forms, |form| {
        bind_unmask(form, config).map_err(|e| (format!("unmask on form #{}", form.id()), e))
    });

    let containers: Vec<_> = config
        .row_containers
        .iter()
        .filter_map(|rows| {
            let container = document.get_element_by_id(&rows.container_id);
            let add_button = document.get_element_by_id(&rows.add_button_id);
            match (container, add_button) {
                (Some(container), Some(add_button)) => Some((rows, container, add_button)),
                _ => {
                    tracing::debug!("[Rows] #{} not on page", rows.container_id);
                    None
                }
            }
        })
        .collect();
    failed += bind_each(&containers, |(rows, container, add_button)| {
        repeatable_rows::dom::initialize_with(container, add_button, config.naming(rows))
            .map_err(|e| (format!("rows in #{}", rows.container_id), FormsError::from(e)))
    });

    tracing::info!("[Masks] {} form(s) enhanced, {} binding(s) failed", forms.len(), failed);
    failed
}

/// Run `bind` on every item, logging failures instead of stopping at the
/// first one. Returns the failure count.
fn bind_each<T>(items: &[T], bind: impl Fn(&T) -> Result<(), (String, FormsError)>) -> usize {
    items
        .iter()
        .filter(|item| match bind(*item) {
            Ok(()) => false,
            Err((what, e)) => {
                tracing::error!("[Enhance] binding {} failed: {}", what, e);
                true
            }
        })
        .count()
}

/// Strip every configured masked field inside `form` to digits
pub fn unmask_fields(form: &HtmlFormElement, config: &FormsConfig) {
    for field in &config.masked_fields {
        let found = form
            .query_selector(&format!("#{}", field.id))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        if let Some(input) = found {
            input.set_value(&strip_formatting(&input.value()));
        }
    }
}

fn input_by_id(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document.get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()
}

fn bind_mask(input: &HtmlInputElement, kind: MaskKind) -> Result<(), FormsError> {
    // Edit pages arrive with raw digits
    let current = input.value();
    if !current.is_empty() {
        input.set_value(&kind.format(&current));
    }

    let target = input.clone();
    let on_input = Closure::<dyn FnMut(Event)>::new(move |_ev: Event| {
        target.set_value(&kind.format(&target.value()));
    });
    input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    on_input.forget();
    Ok(())
}

fn bind_unmask(form: &HtmlFormElement, config: &FormsConfig) -> Result<(), FormsError> {
    let target = form.clone();
    let config = config.clone();
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |_ev: Event| {
        unmask_fields(&target, &config);
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(())
}

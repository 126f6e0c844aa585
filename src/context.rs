//! Forms Context
//!
//! Config shared with every form component via the Leptos Context API.

use leptos::prelude::*;
use repeatable_rows::RowNaming;
use web_sys::HtmlFormElement;

use crate::config::FormsConfig;
use crate::enhance;

#[derive(Clone, Copy)]
pub struct FormsContext {
    config: StoredValue<FormsConfig>,
}

impl FormsContext {
    pub fn new(config: FormsConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    /// Row naming for a container with `suffix`
    pub fn naming(&self, suffix: &str) -> RowNaming {
        self.config
            .with_value(|config| RowNaming::new(config.array_name.clone(), suffix))
    }

    /// Strip the masked fields of `form` right before it is posted
    pub fn unmask(&self, form: &HtmlFormElement) {
        self.config
            .with_value(|config| enhance::unmask_fields(form, config));
    }
}

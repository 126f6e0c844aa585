//! GymTime Forms Frontend Entry Point
//!
//! Enhances server-rendered forms when the page has them, otherwise mounts
//! the standalone app.

mod models;
mod error;
mod config;
mod validate;
mod enhance;
mod context;
mod components;
mod app;

use app::App;
use config::FormsConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let loaded = FormsConfig::load(&document);
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => FormsConfig::default(),
    };
    init_logging(&config);
    if let Err(e) = loaded {
        tracing::warn!("[App] {}, using defaults", e);
    }

    if enhance::has_server_markup(&document, &config) {
        let failed = enhance::enhance_document(&document, &config);
        if failed > 0 {
            tracing::warn!("[App] page enhanced with {} failed binding(s)", failed);
        }
    } else {
        tracing::info!("[App] no server-rendered forms, mounting app");
        mount_to_body(move || view! { <App config=config /> });
    }
}

/// Send `tracing` events to the browser console, filtered by `logLevel`
#[cfg(target_arch = "wasm32")]
fn init_logging(config: &FormsConfig) {
    let Some(level) = config.max_level() else {
        return;
    };
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .build(),
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging(_config: &FormsConfig) {}

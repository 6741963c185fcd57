//! aac-portal web client.
//!
//! This crate provides the Leptos single-page application for aac-portal:
//! the page components, the route outlet, and the bootstrap sequence that
//! mounts everything into the host page.

#![allow(non_snake_case)]

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod pages;

#[cfg(feature = "csr")]
pub mod browser;

/// Browser entry point, run by wasm-bindgen once the module loads.
///
/// Installs the panic hook and console tracing, then runs the bootstrap
/// sequence against the live document.
///
/// # Errors
///
/// Returns the failure to the hosting page if configuration fails to load
/// or the application cannot be mounted.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    run().map_err(|report| {
        tracing::error!(error = %report, "failed to start application");
        wasm_bindgen::JsValue::from_str(&report.to_string())
    })
}

#[cfg(feature = "csr")]
fn run() -> Result<(), rootcause::prelude::Report<error::MountError>> {
    use crate::bootstrap::Bootstrapper;
    use crate::browser::BrowserDocument;
    use crate::config::AppConfig;
    use crate::error::MountError;

    let config = AppConfig::load().map_err(|e| MountError::Config {
        details: e.to_string(),
    })?;
    let document = BrowserDocument::new()?;
    Bootstrapper::new(config).run(&document)?;
    Ok(())
}

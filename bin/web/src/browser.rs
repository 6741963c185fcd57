//! Mounting into the browser document.

use crate::app::App;
use crate::bootstrap::{Application, MountTarget};
use crate::error::MountError;
use leptos::prelude::*;
use rootcause::prelude::Report;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// The page's live document.
pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    /// Grabs the current window's document.
    ///
    /// # Errors
    ///
    /// Returns an error outside a browser window.
    pub fn new() -> Result<Self, Report<MountError>> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(MountError::NoDocument)?;
        Ok(Self { document })
    }
}

impl MountTarget for BrowserDocument {
    type Host = HtmlElement;
    type Handle = ();

    fn find_host(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    }

    fn mount(&self, host: HtmlElement, app: Application) {
        // The application lives as long as the page.
        leptos::mount::mount_to(host, move || view! { <App app=app/> }).forget();
    }
}

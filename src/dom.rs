//! Panic-free DOM lookups
//!
//! Every by-id access goes through these accessors, so an absent or
//! mistyped element surfaces as a `UiError` the caller can log and skip
//! instead of a crash in the hosting page.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::error::{Result, UiError};

/// The current document
///
/// # Errors
///
/// Returns `UiError::DocumentUnavailable` outside a browser context.
pub fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(UiError::DocumentUnavailable)
}

/// Looks up an element by id
///
/// # Errors
///
/// Returns `UiError::MissingElement` if no element carries `id`.
pub fn element_by_id(id: &str) -> Result<Element> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| UiError::MissingElement(id.to_string()))
}

/// Looks up a text input by id
///
/// # Errors
///
/// Returns `UiError::NotAnInput` if the element exists but is not an input.
pub fn input_by_id(id: &str) -> Result<HtmlInputElement> {
    element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| UiError::NotAnInput(id.to_string()))
}

/// Focuses the input with the given id, logging and skipping on absence
pub fn focus_input(id: &str) {
    match input_by_id(id) {
        Ok(input) => {
            if input.focus().is_err() {
                web_sys::console::warn_1(&format!("failed to focus #{id}").into());
            }
        }
        Err(err) => web_sys::console::warn_1(&err.to_string().into()),
    }
}

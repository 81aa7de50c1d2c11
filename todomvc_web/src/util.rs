// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use wasm_bindgen::JsCast;

use crate::WebError;

/// Helper to get the global window
pub fn window() -> Result<web_sys::Window, WebError> {
    web_sys::window().ok_or(WebError::NoWindow)
}

/// Helper to get the HTML document
pub fn document() -> Result<web_sys::Document, WebError> {
    window()?.document().ok_or(WebError::NoDocument)
}

/// Helper to get the HTML document body element
pub fn document_body() -> Result<web_sys::HtmlElement, WebError> {
    document()?.body().ok_or(WebError::NoBody)
}

/// Helper to get the input element an event was dispatched to.
///
/// Returns `None` if the event has no target, or the target isn't an input element.
pub fn event_target_input(event: &web_sys::Event) -> Option<web_sys::HtmlInputElement> {
    event.target()?.dyn_into().ok()
}

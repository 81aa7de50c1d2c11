// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors while starting the app.
#[derive(Debug, Error)]
pub enum WebError {
    /// Not running in a browser window (e.g. in a worker).
    #[error("no global `window` exists")]
    NoWindow,
    /// The window has no document.
    #[error("window has no document")]
    NoDocument,
    /// The document has no `<body>` yet.
    #[error("document has no body")]
    NoBody,
    /// The configured mount element doesn't exist.
    #[error("no element with id `{0}` to mount the app into")]
    MissingMount(String),
    /// A DOM call threw, e.g. because the app can't be inserted where it should be mounted.
    #[error("javascript exception: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

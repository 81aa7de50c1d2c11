// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
#![deny(clippy::trivially_copy_pass_by_ref)]

use std::rc::Rc;

use todomvc_core::Store;

mod config;
mod dom;
mod effect;
mod error;
mod events;
mod location;
mod util;
mod view;

pub use config::{Config, LOG_LEVEL_ATTRIBUTE, MOUNT_ATTRIBUTE, Mount};
pub use error::WebError;
pub use location::{FilterRoute, current_filter, current_hash};
pub use util::{document, document_body, event_target_input, window};
pub use view::TodoApp;

/// A running app, following the URL fragment.
#[derive(Debug)]
pub struct Running {
    /// The rendered app.
    pub app: TodoApp,
    /// Keeps the app's filter in sync with the URL fragment.
    pub route: FilterRoute,
}

/// Mount a fresh app as configured, with the filter taken from the URL fragment.
pub fn mount(config: &Config) -> Result<Running, WebError> {
    let window = window()?;
    let document = window.document().ok_or(WebError::NoDocument)?;
    let parent = config.mount.resolve(&document)?;

    let filter = current_filter(&window);
    let store = Rc::new(Store::new(filter));
    let route = FilterRoute::attach(&window, store.filter.clone());
    let app = TodoApp::mount(&document, &parent, store)?;
    tracing::info!(%filter, mount = ?config.mount, "todo app started");
    Ok(Running { app, route })
}

/// Mount the app and keep it running for the lifetime of the page.
pub fn start(config: &Config) -> Result<(), WebError> {
    let running = mount(config)?;
    // The app responds to events in the background for as long as the page lives.
    std::mem::forget(running);
    Ok(())
}

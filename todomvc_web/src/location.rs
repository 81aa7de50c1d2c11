// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Keeps the selected filter in sync with the URL fragment.

use futures_signals::signal::Mutable;
use gloo::events::EventListener;
use todomvc_core::TodoFilter;

/// The current URL fragment, including the leading `#`, or an empty string.
pub fn current_hash(window: &web_sys::Window) -> String {
    window.location().hash().unwrap_or_default()
}

/// The filter selected by the current URL fragment.
pub fn current_filter(window: &web_sys::Window) -> TodoFilter {
    TodoFilter::from_fragment(&current_hash(window))
}

/// Updates a filter whenever the URL fragment changes.
///
/// Dropping the route stops following the URL.
#[derive(Debug)]
pub struct FilterRoute {
    _listener: EventListener,
}

impl FilterRoute {
    /// Set `filter` from the URL fragment after every `hashchange` of `window`.
    pub fn attach(window: &web_sys::Window, filter: Mutable<TodoFilter>) -> Self {
        let listener = EventListener::new(window, "hashchange", {
            let window = window.clone();
            move |_| {
                let next = current_filter(&window);
                tracing::debug!(filter = %next, "url fragment changed");
                filter.set(next);
            }
        });
        Self {
            _listener: listener,
        }
    }
}

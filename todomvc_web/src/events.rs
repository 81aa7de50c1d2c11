// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use gloo::events::EventListener;
use wasm_bindgen::{JsCast, UnwrapThrowExt};

/// Attach a listener for `event` to `target`, casting the event to `Ev` before calling `handler`.
///
/// The event type `Ev` should inherit from [`web_sys::Event`].
pub(crate) fn on<Ev: JsCast + 'static>(
    target: &web_sys::EventTarget,
    event: impl Into<Cow<'static, str>>,
    mut handler: impl FnMut(Ev) + 'static,
) -> EventListener {
    EventListener::new(target, event, move |event: &web_sys::Event| {
        let event = event.clone().dyn_into::<Ev>().unwrap_throw();
        handler(event);
    })
}

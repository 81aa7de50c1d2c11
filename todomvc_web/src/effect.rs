// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use futures::future::{self, AbortHandle};
use futures_signals::signal::{Signal, SignalExt};

/// Runs a callback with every value of a signal, on the browser's microtask queue.
///
/// The callback first runs with the current value, soon after the effect is created.
/// Changes made in the same event handler are seen as a single change.
/// Dropping the effect stops it.
#[derive(Debug)]
#[must_use = "the effect stops as soon as it is dropped"]
pub(crate) struct Effect {
    handle: AbortHandle,
}

impl Effect {
    pub(crate) fn new<S>(signal: S, mut f: impl FnMut(S::Item) + 'static) -> Self
    where
        S: Signal + 'static,
    {
        let (task, handle) = future::abortable(signal.for_each(move |value| {
            f(value);
            async {}
        }));
        wasm_bindgen_futures::spawn_local(async move {
            if task.await.is_err() {
                tracing::trace!("effect stopped");
            }
        });
        Self { handle }
    }
}

impl Drop for Effect {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

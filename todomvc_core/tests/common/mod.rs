// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code, reason = "Not every test uses every helper")]

use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;
use futures_signals::signal::{Signal, SignalExt};
use todomvc_core::{Store, TodoFilter, TodoId};

/// Records values observed by an effect.
#[derive(Clone)]
pub(crate) struct Log<T>(Rc<RefCell<Vec<T>>>);

impl<T> Default for Log<T> {
    fn default() -> Self {
        Self(Rc::default())
    }
}

impl<T: Clone> Log<T> {
    pub(crate) fn push(&self, value: T) {
        self.0.borrow_mut().push(value);
    }

    pub(crate) fn entries(&self) -> Vec<T> {
        self.0.borrow().clone()
    }
}

/// Drives signals on a single threaded executor, the way the browser's microtask queue does.
pub(crate) struct Effects {
    pool: LocalPool,
}

impl Effects {
    pub(crate) fn new() -> Self {
        Self {
            pool: LocalPool::new(),
        }
    }

    /// Call `f` with every value of `signal`, starting with the current one.
    pub(crate) fn spawn<S>(&self, signal: S, mut f: impl FnMut(S::Item) + 'static)
    where
        S: Signal + 'static,
    {
        self.pool
            .spawner()
            .spawn_local(signal.for_each(move |value| {
                f(value);
                async {}
            }))
            .unwrap();
    }

    /// Record every value of `signal` in the returned log.
    pub(crate) fn log<S>(&self, signal: S) -> Log<S::Item>
    where
        S: Signal + 'static,
        S::Item: Clone,
    {
        let log = Log::default();
        self.spawn(signal, {
            let log = log.clone();
            move |value| log.push(value)
        });
        log
    }

    /// Run every effect which has something to do.
    pub(crate) fn settle(&mut self) {
        self.pool.run_until_stalled();
    }
}

/// A store with the todos `a`, `b` and `c`, where `b` is completed.
pub(crate) fn store_with_abc(filter: TodoFilter) -> (Store, [TodoId; 3]) {
    let store = Store::new(filter);
    let a = store.todos.add("a").unwrap();
    let b = store.todos.add("b").unwrap();
    let c = store.todos.add("c").unwrap();
    store.todos.toggle(b);
    (store, [a, b, c])
}

pub(crate) fn texts(todos: &[todomvc_core::Todo]) -> Vec<&str> {
    todos.iter().map(|todo| todo.text.as_str()).collect()
}

pub(crate) fn owned_texts(todos: &[todomvc_core::Todo]) -> Vec<String> {
    todos.iter().map(|todo| todo.text.clone()).collect()
}

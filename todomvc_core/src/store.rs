// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::cell::Cell;
use std::rc::Rc;

use futures_signals::map_ref;
use futures_signals::signal::{Mutable, Signal};

use crate::{Todo, TodoEdit, TodoFilter, TodoId};

/// The observable, ordered list of todos.
///
/// Every mutation replaces the list as a whole, which notifies every signal derived from it.
/// Cloning a `TodoList` creates another handle to the same list.
#[derive(Clone, Debug)]
pub struct TodoList {
    todos: Mutable<Vec<Todo>>,
    last_id: Rc<Cell<u64>>,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoList {
    /// An empty list.
    pub fn new() -> Self {
        Self {
            todos: Mutable::new(Vec::new()),
            last_id: Rc::default(),
        }
    }

    /// The underlying [`Mutable`], to derive signals from.
    pub fn mutable(&self) -> &Mutable<Vec<Todo>> {
        &self.todos
    }

    /// A signal of `f` applied to the todos, updated after every mutation.
    pub fn signal_ref<B, F>(&self, f: F) -> impl Signal<Item = B> + use<B, F>
    where
        F: FnMut(&Vec<Todo>) -> B,
    {
        self.todos.signal_ref(f)
    }

    /// A snapshot of all todos.
    pub fn get(&self) -> Vec<Todo> {
        self.todos.get_cloned()
    }

    /// Access all todos without cloning them.
    ///
    /// `f` must not mutate this list.
    pub fn with<R>(&self, f: impl FnOnce(&[Todo]) -> R) -> R {
        f(&self.todos.lock_ref())
    }

    /// A snapshot of the todo with the given `id`.
    pub fn find(&self, id: TodoId) -> Option<Todo> {
        self.with(|todos| todos.iter().find(|todo| todo.id == id).cloned())
    }

    /// The number of todos, regardless of their state.
    pub fn len(&self) -> usize {
        self.with(<[Todo]>::len)
    }

    /// Whether there are no todos at all.
    pub fn is_empty(&self) -> bool {
        self.with(<[Todo]>::is_empty)
    }

    /// Whether every todo is completed.
    ///
    /// This is `true` for an empty list.
    pub fn all_completed(&self) -> bool {
        self.with(all_completed)
    }

    fn next_id(&self) -> TodoId {
        let id = self.last_id.get() + 1;
        self.last_id.set(id);
        TodoId(id)
    }

    /// Append a new active todo.
    ///
    /// Surrounding whitespace is removed from `text`. Returns `None` without changing
    /// anything if nothing is left.
    pub fn add(&self, text: &str) -> Option<TodoId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id();
        tracing::debug!(%id, "adding todo");
        self.todos.lock_mut().push(Todo::new(id, text.to_owned()));
        Some(id)
    }

    /// Remove the todo with the given `id`.
    pub fn delete(&self, id: TodoId) {
        tracing::debug!(%id, "deleting todo");
        self.todos.lock_mut().retain(|todo| todo.id != id);
    }

    /// Apply `edit` to the todo it refers to.
    pub fn update(&self, edit: TodoEdit) {
        let mut todos = self.todos.lock_mut();
        match todos.iter_mut().find(|todo| todo.id == edit.id) {
            Some(todo) => {
                tracing::debug!(id = %edit.id, "updating todo");
                todo.apply(edit);
            }
            None => tracing::debug!(id = %edit.id, "no todo to update"),
        }
    }

    /// Flip the completion state of the todo with the given `id`.
    pub fn toggle(&self, id: TodoId) {
        let mut todos = self.todos.lock_mut();
        if let Some(todo) = todos.iter_mut().find(|todo| todo.id == id) {
            todo.completed = !todo.completed;
        }
    }

    /// Mark every todo active if all of them are completed, otherwise mark every todo completed.
    pub fn toggle_all(&self) {
        let mut todos = self.todos.lock_mut();
        let completed = !all_completed(&todos);
        tracing::debug!(completed, "toggling all todos");
        for todo in todos.iter_mut() {
            todo.completed = completed;
        }
    }

    /// Remove all completed todos, returning how many were removed.
    pub fn clear_completed(&self) -> usize {
        let mut todos = self.todos.lock_mut();
        let before = todos.len();
        todos.retain(|todo| !todo.completed);
        let removed = before - todos.len();
        tracing::debug!(removed, "cleared completed todos");
        removed
    }

    /// Finish editing the text of the todo with the given `id`.
    ///
    /// The text is trimmed. If nothing is left, the todo is deleted instead.
    pub fn commit_edit(&self, id: TodoId, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            self.delete(id);
        } else {
            self.update(TodoEdit::new(id).text(text));
        }
    }
}

fn all_completed(todos: &[Todo]) -> bool {
    todos.iter().all(|todo| todo.completed)
}

fn active_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| !todo.completed).count()
}

fn visible(todos: &[Todo], filter: TodoFilter) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| filter.matches(todo))
        .cloned()
        .collect()
}

/// The state of the whole app: the todos, the selected filter, and the views derived from both.
///
/// Each derived view is available as a snapshot, computed from the current state, and as a
/// signal which yields the current value first and a fresh value after every change.
#[derive(Debug)]
pub struct Store {
    /// All todos.
    pub todos: TodoList,
    /// Which todos are shown.
    pub filter: Mutable<TodoFilter>,
}

impl Store {
    /// An empty list, showing the todos selected by `filter`.
    pub fn new(filter: TodoFilter) -> Self {
        Self {
            todos: TodoList::new(),
            filter: Mutable::new(filter),
        }
    }

    /// Show the todos selected by `filter`.
    pub fn set_filter(&self, filter: TodoFilter) {
        tracing::debug!(%filter, "changing filter");
        self.filter.set(filter);
    }

    /// The number of todos which aren't completed.
    pub fn active_count(&self) -> usize {
        self.todos.with(active_count)
    }

    /// Signal of [`active_count`](Self::active_count).
    pub fn active_count_signal(&self) -> impl Signal<Item = usize> + use<> {
        self.todos.signal_ref(|todos| active_count(todos))
    }

    /// The completed todos, in list order.
    pub fn completed(&self) -> Vec<Todo> {
        self.todos.with(|todos| visible(todos, TodoFilter::Completed))
    }

    /// Signal of [`completed`](Self::completed).
    pub fn completed_signal(&self) -> impl Signal<Item = Vec<Todo>> + use<> {
        self.todos.signal_ref(|todos| visible(todos, TodoFilter::Completed))
    }

    /// The todos matching [`filter`](Self::filter), in list order.
    pub fn filtered(&self) -> Vec<Todo> {
        let filter = self.filter.get();
        self.todos.with(|todos| visible(todos, filter))
    }

    /// Signal of [`filtered`](Self::filtered), following both the todos and the filter.
    pub fn filtered_signal(&self) -> impl Signal<Item = Vec<Todo>> + use<> {
        map_ref! {
            let todos = self.todos.mutable().signal_cloned(),
            let filter = self.filter.signal() =>
            visible(todos, *filter)
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(TodoFilter::default())
    }
}

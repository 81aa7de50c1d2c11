// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Identifies a [`Todo`] within a [`TodoList`](crate::TodoList).
///
/// Ids are allocated by the list in increasing order and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TodoId(pub(crate) u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "todo-{}", self.0)
    }
}

/// A single item of the todo list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Todo {
    /// Unique within its list.
    pub id: TodoId,
    /// What needs to be done.
    pub text: String,
    /// Whether the todo is done.
    pub completed: bool,
}

impl Todo {
    pub(crate) fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    pub(crate) fn apply(&mut self, edit: TodoEdit) {
        if let Some(text) = edit.text {
            self.text = text;
        }
        if let Some(completed) = edit.completed {
            self.completed = completed;
        }
    }
}

/// A partial update of the [`Todo`] with the given `id`.
///
/// Fields which are `None` are left untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoEdit {
    /// The todo to change.
    pub id: TodoId,
    /// The new text, if any.
    pub text: Option<String>,
    /// The new completion state, if any.
    pub completed: Option<bool>,
}

impl TodoEdit {
    /// An edit of `id` which doesn't change anything yet.
    pub fn new(id: TodoId) -> Self {
        Self {
            id,
            text: None,
            completed: None,
        }
    }

    /// Replace the text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set whether the todo is completed.
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

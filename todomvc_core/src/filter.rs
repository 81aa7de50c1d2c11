// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::Todo;

/// Which todos are shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TodoFilter {
    /// Every todo.
    #[default]
    All,
    /// Todos which aren't completed yet.
    Active,
    /// Completed todos.
    Completed,
}

/// The error returned when a string isn't the name of a [`TodoFilter`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown todo filter `{0}`, expected one of `all`, `active` or `completed`")]
pub struct ParseFilterError(String);

impl TodoFilter {
    /// All filters, in the order they are presented.
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// The lowercase name, as used in the URL fragment.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// A human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// Whether `todo` is shown with this filter.
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.completed,
            Self::Completed => todo.completed,
        }
    }

    /// The URL fragment (including the `#`) which selects this filter.
    pub fn fragment(self) -> &'static str {
        match self {
            Self::All => "#/",
            Self::Active => "#/active",
            Self::Completed => "#/completed",
        }
    }

    /// Read the filter from a URL fragment such as `#/active`.
    ///
    /// Everything after the first `#/` is taken as the filter name.
    /// Falls back to [`TodoFilter::All`] if there is no `#/` or the name is unknown.
    pub fn from_fragment(fragment: &str) -> Self {
        let Some((_, name)) = fragment.split_once("#/") else {
            return Self::All;
        };
        name.parse().unwrap_or_else(|err: ParseFilterError| {
            if !name.is_empty() {
                tracing::debug!("{err}, showing all todos");
            }
            Self::All
        })
    }
}

impl FromStr for TodoFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| ParseFilterError(s.to_owned()))
    }
}

impl fmt::Display for TodoFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

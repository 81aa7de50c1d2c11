// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
// LINEBENDER LINT SET - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
#![deny(clippy::trivially_copy_pass_by_ref)]

mod filter;
pub use filter::{ParseFilterError, TodoFilter};

mod store;
pub use store::{Store, TodoList};

mod todo;
pub use todo::{Todo, TodoEdit, TodoId};

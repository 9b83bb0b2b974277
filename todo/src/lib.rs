//! Single-user to-do list with flat-file persistence.
//!
//! This crate implements an in-memory task list persisted as a JSON file on
//! disk, mutated through a small set of controller commands. The architecture
//! enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (task model, list mutations,
//!   command contract). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (task file store, configuration).
//!   Isolated so the lenient-load and atomic-save contracts are testable
//!   against real temp directories.
//!
//! [`controller`] coordinates core mutations with persistence (save after
//! every mutation); [`session`] is a thin terminal front end that renders the
//! list and forwards user input as commands.

pub mod controller;
pub mod core;
pub mod io;
pub mod logging;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

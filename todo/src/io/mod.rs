//! Side-effecting operations: the task file store and configuration.

pub mod config;
pub mod store;

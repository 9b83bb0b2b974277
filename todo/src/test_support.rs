//! Test-only helpers for constructing tasks and stores.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::task::Task;
use crate::io::store::TaskStore;

/// Create a task with an explicit completion flag.
pub fn task(text: &str, done: bool) -> Task {
    Task {
        text: text.to_string(),
        done,
    }
}

/// Build a task list from `(text, done)` pairs.
pub fn tasks(specs: &[(&str, bool)]) -> Vec<Task> {
    specs.iter().map(|(text, done)| task(text, *done)).collect()
}

/// A task file path inside a fresh temp directory. No file exists until a
/// store saves one; the directory lives as long as the fixture.
pub struct StoreFixture {
    _dir: tempfile::TempDir,
    path: PathBuf,
}

impl StoreFixture {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("todo_gui.json");
        Ok(Self { _dir: dir, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A fresh store over the fixture's task file.
    pub fn store(&self) -> TaskStore {
        TaskStore::new(&self.path)
    }
}

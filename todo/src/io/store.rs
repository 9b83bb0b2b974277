//! Task file persistence with a deliberately asymmetric contract.
//!
//! Loading never fails: a missing, unreadable, or malformed task file degrades
//! to an empty list so the application always starts. Saving is the opposite:
//! write failures propagate, because silently dropping a save would lie to the
//! user about their data being on disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::task::Task;

/// Durable storage for the task list, bound to an explicit file path.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the task list from disk. Never fails; every load problem
    /// degrades to an empty (or shorter) list and is logged, not surfaced.
    ///
    /// Per-record leniency: an array element becomes a task only if it is an
    /// object with a `"text"` key. Unknown extra keys are ignored; anything
    /// else is dropped.
    pub fn load(&self) -> Vec<Task> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no task file, starting empty");
            return Vec::new();
        }
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "task file unreadable, starting empty");
                return Vec::new();
            }
        };
        let value: Value = match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "task file is not valid json, starting empty");
                return Vec::new();
            }
        };
        let Value::Array(records) = value else {
            warn!(path = %self.path.display(), "task file top level is not an array, starting empty");
            return Vec::new();
        };
        let tasks: Vec<Task> = records.iter().filter_map(task_from_record).collect();
        let dropped = records.len() - tasks.len();
        if dropped > 0 {
            warn!(path = %self.path.display(), dropped, "dropped records without a text field");
        }
        debug!(path = %self.path.display(), count = tasks.len(), "task list loaded");
        tasks
    }

    /// Atomically write the full task list to disk (temp file + rename,
    /// full overwrite). Failures propagate with path context.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        debug!(path = %self.path.display(), count = tasks.len(), "writing task list");
        let mut buf = serde_json::to_string_pretty(tasks).context("serialize task list")?;
        buf.push('\n');
        write_atomic(&self.path, &buf)
    }
}

/// Coerce one stored record into a task, or drop it.
///
/// Non-string `text` values are rendered to their JSON text; `done` follows
/// value truthiness (absent, null, 0, "", [] and {} all read as false).
fn task_from_record(record: &Value) -> Option<Task> {
    let record = record.as_object()?;
    let text = match record.get("text")? {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    let done = record.get("done").is_some_and(truthy);
    Some(Task { text, done })
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
    }
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp task file {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("replace task file {}", path.display()))?;
    Ok(())
}

//! Command-dispatch contract between the presentation layer and the
//! controller.
//!
//! The presentation layer never mutates the task list directly: it submits a
//! [`Command`] and re-renders from the controller's state afterwards. These
//! types define that stable contract. Rejections are values, not errors, so
//! the controller's `Result` carries only persistence failures.

/// A user gesture translated into a controller operation.
///
/// Selection is `Option<usize>`: `None` means no task is currently selected,
/// which the controller rejects the same way as an out-of-range index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { text: String },
    Toggle { index: Option<usize> },
    Delete { index: Option<usize> },
    ClearCompleted,
}

/// A mutation that took effect (and was persisted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    Added,
    /// `done` is the flag's new value after the flip.
    Toggled { done: bool },
    /// `text` of the removed task, for caller-side reporting.
    Deleted { text: String },
    /// Number of completed tasks removed; may be zero.
    Cleared { removed: usize },
}

/// Caller-visible rejection. No mutation and no save occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Add text was empty or whitespace-only.
    EmptyInput,
    /// Toggle/delete without a selection, or the index is out of range.
    NoSelection,
}

/// Result of dispatching a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied(Applied),
    Rejected(Rejection),
}

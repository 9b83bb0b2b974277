//! Task data model and read-only display projections.

use serde::{Deserialize, Serialize};

/// A single to-do entry. Identity is positional: tasks carry no id and are
/// addressed by their current index in the list.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// Create an open task. Callers are expected to pass trimmed, non-empty
    /// text; [`crate::core::list::add`] is the enforcing boundary.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }
}

/// `(done, total)` counts for the status line.
pub fn completed_summary(tasks: &[Task]) -> (usize, usize) {
    let done = tasks.iter().filter(|task| task.done).count();
    (done, tasks.len())
}

/// Render one task for the list display.
pub fn display_line(task: &Task) -> String {
    let mark = if task.done { "[x]" } else { "[ ]" };
    format!("{mark} {}", task.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::tasks;

    #[test]
    fn summary_counts_done_and_total() {
        let list = tasks(&[("a", false), ("b", true), ("c", true)]);
        assert_eq!(completed_summary(&list), (2, 3));
    }

    #[test]
    fn summary_of_empty_list_is_zero_zero() {
        assert_eq!(completed_summary(&[]), (0, 0));
    }

    #[test]
    fn display_line_marks_completion() {
        assert_eq!(display_line(&Task::new("write tests")), "[ ] write tests");
        let mut done = Task::new("ship it");
        done.done = true;
        assert_eq!(display_line(&done), "[x] ship it");
    }

    #[test]
    fn done_defaults_to_false_when_absent() {
        let task: Task = serde_json::from_str(r#"{"text":"x"}"#).expect("parse");
        assert_eq!(task, Task::new("x"));
    }
}

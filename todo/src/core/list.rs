//! Pure task-list mutations.
//!
//! These functions own the mutation semantics of the four controller
//! operations but know nothing about persistence: they either mutate the list
//! in place and succeed, or reject the input and leave the list untouched.

use crate::core::command::Rejection;
use crate::core::task::Task;

/// Append a new open task built from `raw` after trimming.
///
/// Empty or whitespace-only input is rejected with no mutation.
pub fn add(tasks: &mut Vec<Task>, raw: &str) -> Result<(), Rejection> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(Rejection::EmptyInput);
    }
    tasks.push(Task::new(text));
    Ok(())
}

/// Flip the `done` flag of the task at `index` in place.
///
/// Returns the new flag value. The task keeps its position: toggling never
/// reorders the list.
pub fn toggle(tasks: &mut [Task], index: Option<usize>) -> Result<bool, Rejection> {
    let task = selected_mut(tasks, index)?;
    task.done = !task.done;
    Ok(task.done)
}

/// Remove and return the task at `index`; later tasks shift down one slot.
pub fn delete(tasks: &mut Vec<Task>, index: Option<usize>) -> Result<Task, Rejection> {
    let index = match index {
        Some(index) if index < tasks.len() => index,
        _ => return Err(Rejection::NoSelection),
    };
    Ok(tasks.remove(index))
}

/// Drop every completed task, preserving the relative order of the rest.
///
/// Returns the number removed; zero is not an error.
pub fn clear_completed(tasks: &mut Vec<Task>) -> usize {
    let before = tasks.len();
    tasks.retain(|task| !task.done);
    before - tasks.len()
}

fn selected_mut(tasks: &mut [Task], index: Option<usize>) -> Result<&mut Task, Rejection> {
    index
        .and_then(|index| tasks.get_mut(index))
        .ok_or(Rejection::NoSelection)
}

//! Interactive terminal session over the controller.
//!
//! The session is the presentation layer: it renders the list, keeps the
//! current selection, asks for delete confirmation, and surfaces rejection
//! notices. All task semantics live in [`crate::controller`]; the session
//! only translates lines of input into commands and re-renders afterwards.
//!
//! The reader/writer are generic so tests can script a whole session against
//! an in-memory buffer.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::controller::Controller;
use crate::core::command::{Applied, Command, Outcome, Rejection};
use crate::core::task::{completed_summary, display_line};

/// One line of user input, parsed. Indices are 1-based on the way in and
/// converted before they reach the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Add(String),
    Toggle(Option<usize>),
    Delete(Option<usize>),
    Clear,
    Select(usize),
    List,
    Save,
    Help,
    Quit,
    Blank,
    Unknown(String),
}

fn parse_action(line: &str) -> Action {
    let line = line.trim();
    if line.is_empty() {
        return Action::Blank;
    }
    // A bare number selects that task, like clicking a listbox row.
    if let Ok(number) = line.parse::<usize>() {
        return Action::Select(number);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    match verb.to_ascii_lowercase().as_str() {
        "add" | "a" => Action::Add(rest.to_string()),
        "toggle" | "t" => Action::Toggle(parse_index(rest)),
        "delete" | "del" | "d" => Action::Delete(parse_index(rest)),
        "clear" => Action::Clear,
        "list" | "ls" => Action::List,
        "save" => Action::Save,
        "help" | "?" => Action::Help,
        "quit" | "exit" | "q" => Action::Quit,
        _ => Action::Unknown(line.to_string()),
    }
}

/// Parse an optional 1-based index argument. Anything that is not a positive
/// number means "use the current selection".
fn parse_index(arg: &str) -> Option<usize> {
    arg.parse::<usize>().ok().and_then(|n| n.checked_sub(1))
}

fn notice(rejection: Rejection) -> &'static str {
    match rejection {
        Rejection::EmptyInput => "Type a task first.",
        Rejection::NoSelection => "Select a task first.",
    }
}

/// Drive the session until `quit` or end of input, then perform the final
/// save. Save failures from any command end the session with an error.
pub fn run(
    controller: &mut Controller,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    let mut selected: Option<usize> = None;
    render(&mut output, controller, selected)?;
    writeln!(output, "Type help for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;

        match parse_action(&line) {
            Action::Blank => {}
            Action::Help => write_help(&mut output)?,
            Action::List => render(&mut output, controller, selected)?,
            Action::Select(number) => {
                let index = number
                    .checked_sub(1)
                    .filter(|index| *index < controller.tasks().len());
                match index {
                    Some(index) => {
                        selected = Some(index);
                        render(&mut output, controller, selected)?;
                    }
                    None => writeln!(output, "No task numbered {number}.")?,
                }
            }
            Action::Add(text) => match controller.dispatch(Command::Add { text })? {
                Outcome::Applied(_) => render(&mut output, controller, selected)?,
                Outcome::Rejected(rejection) => writeln!(output, "{}", notice(rejection))?,
            },
            Action::Toggle(index) => {
                let index = index.or(selected);
                match controller.dispatch(Command::Toggle { index })? {
                    Outcome::Applied(_) => render(&mut output, controller, selected)?,
                    Outcome::Rejected(rejection) => writeln!(output, "{}", notice(rejection))?,
                }
            }
            Action::Delete(index) => {
                let index = index.or(selected);
                let Some(task) = index.and_then(|index| controller.tasks().get(index)) else {
                    writeln!(output, "{}", notice(Rejection::NoSelection))?;
                    continue;
                };
                // Confirmation names the task, and is the presentation
                // layer's job; the controller does not re-confirm.
                write!(output, "Delete this task? \"{}\" [y/N] ", task.text)?;
                output.flush()?;
                let Some(answer) = lines.next() else { break };
                if !is_yes(&answer?) {
                    continue;
                }
                match controller.dispatch(Command::Delete { index })? {
                    Outcome::Applied(_) => {
                        // Indices shifted; a stale selection would point at
                        // a different task.
                        selected = None;
                        render(&mut output, controller, selected)?;
                    }
                    Outcome::Rejected(rejection) => writeln!(output, "{}", notice(rejection))?,
                }
            }
            Action::Clear => {
                if let Outcome::Applied(Applied::Cleared { removed }) =
                    controller.dispatch(Command::ClearCompleted)?
                {
                    selected = None;
                    render(&mut output, controller, selected)?;
                    writeln!(output, "Removed {removed} completed task(s).")?;
                }
            }
            Action::Save => {
                controller.save()?;
                writeln!(output, "Saved.")?;
            }
            Action::Quit => break,
            Action::Unknown(line) => {
                writeln!(output, "Unknown command \"{line}\". Type help for commands.")?;
            }
        }
    }

    // Final save before the list goes away.
    controller.save()?;
    Ok(())
}

fn render(output: &mut impl Write, controller: &Controller, selected: Option<usize>) -> Result<()> {
    let tasks = controller.tasks();
    if tasks.is_empty() {
        writeln!(output, "(no tasks yet)")?;
    }
    for (index, task) in tasks.iter().enumerate() {
        let marker = if selected == Some(index) { '*' } else { ' ' };
        writeln!(output, "{marker}{:>3}. {}", index + 1, display_line(task))?;
    }
    let (done, total) = completed_summary(tasks);
    let path = controller.store().path();
    let name = path
        .file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy();
    writeln!(output, "{done}/{total} completed • saved in {name}")?;
    Ok(())
}

fn write_help(output: &mut impl Write) -> Result<()> {
    writeln!(output, "Commands:")?;
    writeln!(output, "  add <text>    append a new task")?;
    writeln!(output, "  <n>           select task n")?;
    writeln!(output, "  toggle [n]    flip completion of task n (or the selection)")?;
    writeln!(output, "  delete [n]    remove task n (or the selection), after confirming")?;
    writeln!(output, "  clear         remove all completed tasks")?;
    writeln!(output, "  list          redraw the list")?;
    writeln!(output, "  save          write the task file now")?;
    writeln!(output, "  quit          save and exit")?;
    Ok(())
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

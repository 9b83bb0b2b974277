//! Task list controller: owns the list, dispatches commands, saves after
//! every mutation.

use anyhow::Result;

use crate::core::command::{Applied, Command, Outcome};
use crate::core::list;
use crate::core::task::Task;
use crate::io::store::TaskStore;

/// Exclusive owner of the in-memory task list.
///
/// Every accepted command mutates the list and then persists it; rejected
/// commands touch neither memory nor disk. When a save fails the in-memory
/// mutation is deliberately kept (the operation took effect, only durability
/// failed) and the error propagates to whoever can tell the user.
pub struct Controller {
    tasks: Vec<Task>,
    store: TaskStore,
}

impl Controller {
    /// Open the controller over a store, loading whatever task list the
    /// store can recover (an empty list when there is none).
    pub fn open(store: TaskStore) -> Self {
        let tasks = store.load();
        Self { tasks, store }
    }

    /// Read-only projection for rendering. The presentation layer never
    /// mutates the list directly.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Apply one command. Rejections come back as [`Outcome::Rejected`];
    /// the `Err` branch is reserved for save failures.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome> {
        let applied = match command {
            Command::Add { text } => match list::add(&mut self.tasks, &text) {
                Ok(()) => Applied::Added,
                Err(rejection) => return Ok(Outcome::Rejected(rejection)),
            },
            Command::Toggle { index } => match list::toggle(&mut self.tasks, index) {
                Ok(done) => Applied::Toggled { done },
                Err(rejection) => return Ok(Outcome::Rejected(rejection)),
            },
            Command::Delete { index } => match list::delete(&mut self.tasks, index) {
                Ok(task) => Applied::Deleted { text: task.text },
                Err(rejection) => return Ok(Outcome::Rejected(rejection)),
            },
            // Always saves, even when nothing was removed; the rewrite is
            // observable via the file's modification time.
            Command::ClearCompleted => Applied::Cleared {
                removed: list::clear_completed(&mut self.tasks),
            },
        };
        self.store.save(&self.tasks)?;
        Ok(Outcome::Applied(applied))
    }

    /// Explicit save of the current list: the shutdown save, and the manual
    /// save action.
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::command::Rejection;
    use crate::test_support::{StoreFixture, task, tasks};

    #[test]
    fn open_on_empty_store_starts_empty() {
        let fixture = StoreFixture::new().expect("fixture");
        let controller = Controller::open(fixture.store());
        assert!(controller.tasks().is_empty());
    }

    #[test]
    fn accepted_commands_persist_immediately() {
        let fixture = StoreFixture::new().expect("fixture");
        let mut controller = Controller::open(fixture.store());

        let outcome = controller
            .dispatch(Command::Add {
                text: " water plants ".to_string(),
            })
            .expect("dispatch");
        assert_eq!(outcome, Outcome::Applied(Applied::Added));

        // A fresh store sees the trimmed task on disk already.
        assert_eq!(fixture.store().load(), tasks(&[("water plants", false)]));
    }

    #[test]
    fn rejected_commands_do_not_save() {
        let fixture = StoreFixture::new().expect("fixture");
        let mut controller = Controller::open(fixture.store());

        let outcome = controller
            .dispatch(Command::Add {
                text: "   ".to_string(),
            })
            .expect("dispatch");
        assert_eq!(outcome, Outcome::Rejected(Rejection::EmptyInput));

        let outcome = controller
            .dispatch(Command::Toggle { index: None })
            .expect("dispatch");
        assert_eq!(outcome, Outcome::Rejected(Rejection::NoSelection));

        let outcome = controller
            .dispatch(Command::Delete { index: Some(3) })
            .expect("dispatch");
        assert_eq!(outcome, Outcome::Rejected(Rejection::NoSelection));

        // No accepted command yet, so nothing has been written.
        assert!(!fixture.path().exists());
    }

    #[test]
    fn toggle_reports_the_new_flag() {
        let fixture = StoreFixture::new().expect("fixture");
        fixture
            .store()
            .save(&tasks(&[("a", false)]))
            .expect("seed");
        let mut controller = Controller::open(fixture.store());

        let outcome = controller
            .dispatch(Command::Toggle { index: Some(0) })
            .expect("dispatch");
        assert_eq!(outcome, Outcome::Applied(Applied::Toggled { done: true }));
        let outcome = controller
            .dispatch(Command::Toggle { index: Some(0) })
            .expect("dispatch");
        assert_eq!(outcome, Outcome::Applied(Applied::Toggled { done: false }));
    }

    #[test]
    fn delete_reports_the_removed_text() {
        let fixture = StoreFixture::new().expect("fixture");
        fixture
            .store()
            .save(&tasks(&[("keep", false), ("drop", true)]))
            .expect("seed");
        let mut controller = Controller::open(fixture.store());

        let outcome = controller
            .dispatch(Command::Delete { index: Some(1) })
            .expect("dispatch");
        assert_eq!(
            outcome,
            Outcome::Applied(Applied::Deleted {
                text: "drop".to_string()
            })
        );
        assert_eq!(controller.tasks(), [task("keep", false)]);
        assert_eq!(fixture.store().load(), tasks(&[("keep", false)]));
    }

    #[test]
    fn clear_completed_saves_even_when_nothing_removed() {
        let fixture = StoreFixture::new().expect("fixture");
        fixture
            .store()
            .save(&tasks(&[("open", false)]))
            .expect("seed");
        let mut controller = Controller::open(fixture.store());

        // Remove the file out from under the controller: the unconditional
        // save after clear must recreate it.
        std::fs::remove_file(fixture.path()).expect("remove");
        let outcome = controller.dispatch(Command::ClearCompleted).expect("dispatch");
        assert_eq!(outcome, Outcome::Applied(Applied::Cleared { removed: 0 }));
        assert!(fixture.path().exists());
        assert_eq!(fixture.store().load(), tasks(&[("open", false)]));
    }

    #[test]
    fn clear_completed_reports_removed_count() {
        let fixture = StoreFixture::new().expect("fixture");
        fixture
            .store()
            .save(&tasks(&[("a", false), ("b", true), ("c", true), ("d", false)]))
            .expect("seed");
        let mut controller = Controller::open(fixture.store());

        let outcome = controller.dispatch(Command::ClearCompleted).expect("dispatch");
        assert_eq!(outcome, Outcome::Applied(Applied::Cleared { removed: 2 }));
        assert_eq!(controller.tasks(), tasks(&[("a", false), ("d", false)]));
    }

    #[test]
    fn save_failure_keeps_the_in_memory_mutation() {
        let fixture = StoreFixture::new().expect("fixture");
        let mut controller = Controller::open(fixture.store());
        controller
            .dispatch(Command::Add {
                text: "survives".to_string(),
            })
            .expect("dispatch");

        // Turn the data file path into a directory so the rename fails.
        std::fs::remove_file(fixture.path()).expect("remove");
        std::fs::create_dir(fixture.path()).expect("block path");

        let result = controller.dispatch(Command::Add {
            text: "durability fails".to_string(),
        });
        assert!(result.is_err());
        assert_eq!(
            controller.tasks(),
            tasks(&[("survives", false), ("durability fails", false)])
        );
    }
}
